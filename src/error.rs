//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a diary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Please enter a title for your entry.")]
    MissingTitle,

    #[error("Please write something in your diary entry.")]
    MissingContent,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry reference: {0}")]
    InvalidReference(String),

    #[error("Entry store is corrupt: {path}: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::MissingTitle | DiaryError::MissingContent => 3,
            DiaryError::EntryNotFound(_) | DiaryError::InvalidReference(_) => 4,
            _ => 1,
        }
    }

    /// True for the two domain validations (empty title, empty content)
    pub fn is_validation(&self) -> bool {
        matches!(self, DiaryError::MissingTitle | DiaryError::MissingContent)
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a diary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'diary init' in this directory to create a new journal\n\
                    • Navigate to an existing diary directory\n\
                    • Set DIARY_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DiaryError::EntryNotFound(reference) | DiaryError::InvalidReference(reference) => {
                format!(
                    "No entry matches '{}'\n\n\
                    Suggestions:\n\
                    • Use 'diary list' to see entries, newest first\n\
                    • Refer to an entry by its list position (e.g., 1) or its id (e.g., entry_1718000000)",
                    reference
                )
            }
            DiaryError::CorruptStore { path, source } => {
                format!(
                    "Entry store is corrupt: {}\n{}\n\n\
                    Suggestions:\n\
                    • Repair or move the file aside and run the command again\n\
                    • Accept an empty journal: diary config on_corrupt empty",
                    path.display(),
                    source
                )
            }
            DiaryError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: diary config editor 'vim'\n\
                    • Pass the text directly with --content",
                    msg
                )
            }
            DiaryError::Config(msg) => {
                if msg.contains("on_corrupt") {
                    format!(
                        "{}\n\n\
                        Valid policies: empty, fail\n\
                        Example: diary config on_corrupt fail",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_diary_directory_suggestion() {
        let err = DiaryError::NotDiaryDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("diary init"));
        assert!(msg.contains("DIARY_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            DiaryError::MissingTitle.to_string(),
            "Please enter a title for your entry."
        );
        assert_eq!(
            DiaryError::MissingContent.to_string(),
            "Please write something in your diary entry."
        );
        assert!(DiaryError::MissingTitle.is_validation());
        assert!(!DiaryError::EntryNotFound("x".to_string()).is_validation());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DiaryError::NotDiaryDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(DiaryError::MissingContent.exit_code(), 3);
        assert_eq!(DiaryError::EntryNotFound("9".to_string()).exit_code(), 4);
        assert_eq!(DiaryError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = DiaryError::EntryNotFound("entry_1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("diary list"));
        assert!(msg.contains("entry_1"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = DiaryError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("diary config editor"));
        assert!(msg.contains("--content"));
    }

    #[test]
    fn test_config_corrupt_policy_suggestions() {
        let err = DiaryError::Config("Invalid on_corrupt policy: xyz".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("empty, fail"));
    }

    #[test]
    fn test_io_error_prefix() {
        let err = DiaryError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.display_with_suggestions(), "IO error: denied");
    }
}
