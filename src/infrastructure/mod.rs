//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod repository;
pub mod store;

pub use config::Config;
pub use editor::ExternalEditor;
pub use repository::{FileSystemJournal, JournalRepository};
pub use store::{CorruptPolicy, EntryStore};
