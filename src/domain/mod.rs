//! Domain layer - Entry model and validation

pub mod entry;
pub mod entry_ref;

pub use entry::{Entry, EntryDraft, EntryId};
pub use entry_ref::EntryRef;
