//! Config management use case

use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, CorruptPolicy, FileSystemJournal, JournalRepository};
use std::str::FromStr;

/// Keys accepted by `diary config`
pub const CONFIG_KEYS: &str = "data_file, editor, on_corrupt, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemJournal,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemJournal) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "data_file" => Ok(config.data_file.clone()),
            "editor" => Ok(config.editor.clone()),
            "on_corrupt" => Ok(format!("{:?}", config.on_corrupt).to_lowercase()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "data_file" => {
                if value.trim().is_empty() {
                    return Err(DiaryError::Config("data_file cannot be empty".to_string()));
                }
                config.data_file = value.trim().to_string();
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "on_corrupt" => {
                config.on_corrupt = CorruptPolicy::from_str(value).map_err(DiaryError::Config)?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_file, editor, on_corrupt",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
