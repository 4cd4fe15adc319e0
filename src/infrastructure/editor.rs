//! External editor integration for composing entry content

use crate::error::{DiaryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Runs the user's editor on a scratch file and reads the result back
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// Create an editor with the given command line (e.g. `code -w`)
    pub fn new(editor_command: String) -> Self {
        ExternalEditor {
            command: editor_command,
        }
    }

    /// Open `initial` in the editor, wait for it to exit and return the edited text
    pub fn compose(&self, initial: &str) -> Result<String> {
        let path = scratch_path();
        fs::write(&path, initial)?;

        let outcome = self
            .run(&path)
            .and_then(|()| fs::read_to_string(&path).map_err(DiaryError::Io));
        let _ = fs::remove_file(&path);
        outcome
    }

    /// Launch the editor on `file_path` and block until it exits
    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());
        debug!(program = %program, "launching editor");

        // On Windows, use cmd /c so .bat and .cmd editors are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DiaryError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DiaryError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

fn scratch_path() -> PathBuf {
    let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("diary-compose-{}-{}.txt", std::process::id(), n))
}
