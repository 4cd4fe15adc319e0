//! Journal root discovery and layout

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::DIARY_DIR;
use crate::infrastructure::{Config, EntryStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the journal root explicitly
pub const ROOT_ENV: &str = "DIARY_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this journal
    fn root(&self) -> &Path;

    /// Load configuration from .diary/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .diary/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .diary directory exists
    fn is_initialized(&self) -> bool;

    /// Create .diary directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the entry store named by the config
    fn open_store(&self) -> Result<EntryStore>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemJournal {
    pub root: PathBuf,
}

impl FileSystemJournal {
    /// Create a journal handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemJournal { root }
    }

    /// Discover journal root.
    /// First checks DIARY_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemJournal::new(path));
            } else {
                return Err(DiaryError::Config(format!(
                    "DIARY_ROOT is set to '{}' but no .diary directory found. \
                    Run 'diary init' in that directory or unset DIARY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_diary_dir(&current) {
                return Ok(FileSystemJournal::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaryError::NotDiaryDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemJournal {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let diary_dir = self.root.join(DIARY_DIR);

        if diary_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&diary_dir)?;
        Ok(())
    }

    fn open_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;
        EntryStore::load(config.data_path(&self.root), config.on_corrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::CorruptPolicy;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized(temp: &TempDir) -> FileSystemJournal {
        let journal = FileSystemJournal::new(temp.path().to_path_buf());
        journal.initialize().unwrap();
        journal.save_config(&Config::new()).unwrap();
        journal
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let journal = FileSystemJournal::new(temp.path().to_path_buf());

        assert!(!journal.is_initialized());
        journal.initialize().unwrap();
        assert!(journal.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let journal = FileSystemJournal::new(temp.path().to_path_buf());

        journal.initialize().unwrap();
        assert!(journal.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        initialized(&temp);
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemJournal::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_diary() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemJournal::discover_from(temp.path());
        assert!(matches!(result, Err(DiaryError::NotDiaryDirectory(_))));
    }

    #[test]
    fn test_discover_uses_root_env() {
        let _lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let temp = TempDir::new().unwrap();
        initialized(&temp);

        std::env::set_var(ROOT_ENV, temp.path());
        let found = FileSystemJournal::discover().unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_root_env_without_diary_dir_fails() {
        let _lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV);
        let temp = TempDir::new().unwrap();

        std::env::set_var(ROOT_ENV, temp.path());
        let result = FileSystemJournal::discover();
        assert!(matches!(result, Err(DiaryError::Config(_))));
    }

    #[test]
    fn test_open_store_uses_configured_file() {
        let temp = TempDir::new().unwrap();
        let journal = initialized(&temp);
        let mut config = journal.load_config().unwrap();
        config.data_file = "notes/mine.json".to_string();
        journal.save_config(&config).unwrap();

        let store = journal.open_store().unwrap();
        assert_eq!(store.path(), temp.path().join("notes/mine.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_store_honours_corrupt_policy() {
        let temp = TempDir::new().unwrap();
        let journal = initialized(&temp);
        fs::write(temp.path().join("diary_entries.json"), "garbage").unwrap();

        assert!(journal.open_store().unwrap().recovered_from_corrupt());

        let mut config = journal.load_config().unwrap();
        config.on_corrupt = CorruptPolicy::Fail;
        journal.save_config(&config).unwrap();
        assert!(matches!(
            journal.open_store(),
            Err(DiaryError::CorruptStore { .. })
        ));
    }
}
