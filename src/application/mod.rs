//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod manage_entries;
pub mod session;

pub use manage_config::ConfigService;
pub use manage_entries::EntryService;
pub use session::{EditorSession, SaveOutcome, SessionState};
