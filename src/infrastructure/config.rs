//! Configuration management

use crate::error::{DiaryError, Result};
use crate::infrastructure::store::CorruptPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory inside a journal root that marks it as a diary
pub const DIARY_DIR: &str = ".diary";

/// Default journal file name, relative to the journal root
pub const DEFAULT_DATA_FILE: &str = "diary_entries.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub editor: String,
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,
    pub created: DateTime<Utc>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: default_data_file(),
            editor: Self::detect_default_editor(),
            on_corrupt: CorruptPolicy::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .diary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .diary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(DIARY_DIR);
        let config_path = diary_dir.join("config.toml");

        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Journal file location for a journal rooted at `root`
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.data_file, "diary_entries.json");
        assert_eq!(config.on_corrupt, CorruptPolicy::Empty);
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.on_corrupt = CorruptPolicy::Fail;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".diary").exists());
        assert!(temp.path().join(".diary/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.data_file, config.data_file);
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.on_corrupt, CorruptPolicy::Fail);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_fills_missing_optional_fields() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".diary")).unwrap();
        fs::write(
            temp.path().join(".diary/config.toml"),
            "editor = \"vim\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_file, DEFAULT_DATA_FILE);
        assert_eq!(loaded.on_corrupt, CorruptPolicy::Empty);
        assert_eq!(loaded.editor, "vim");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            DiaryError::NotDiaryDirectory(_) => {}
            other => panic!("Expected NotDiaryDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".diary")).unwrap();
        fs::write(temp.path().join(".diary/config.toml"), "on_corrupt = 5").unwrap();

        let result = Config::load_from_dir(temp.path());
        assert!(matches!(result, Err(DiaryError::Config(_))));
    }

    #[test]
    fn test_data_path_joins_root() {
        let config = Config::new();
        let root = Path::new("/tmp/journal");
        assert_eq!(
            config.data_path(root),
            PathBuf::from("/tmp/journal/diary_entries.json")
        );
    }

    #[test]
    fn test_default_editor_detection() {
        let editor = Config::detect_default_editor();
        assert!(!editor.is_empty());

        if cfg!(windows) {
            assert!(
                editor == "notepad"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        } else {
            assert!(
                editor == "nano"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        }
    }
}
