//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemJournal, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path, returning its config.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let journal = FileSystemJournal::new(path.to_path_buf());
    journal.initialize()?;

    let config = Config::new();
    journal.save_config(&config)?;

    info!(root = %path.display(), "initialized journal");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("journal");

        let config = init(&root).unwrap();

        assert!(root.join(".diary/config.toml").exists());
        assert_eq!(config.data_file, "diary_entries.json");
        // the journal file is only written on first save
        assert!(!root.join("diary_entries.json").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
