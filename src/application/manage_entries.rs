//! One-shot entry use cases (list, show, add, edit, delete)

use crate::application::session::{EditorSession, SaveOutcome};
use crate::domain::{Entry, EntryId, EntryRef};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{EntryStore, JournalRepository};
use chrono::{DateTime, Local};

/// Drives a throwaway editor session for commands that run once and exit
pub struct EntryService {
    store: EntryStore,
    session: EditorSession,
}

impl EntryService {
    /// Load the journal's store
    pub fn open(repository: &impl JournalRepository) -> Result<Self> {
        Ok(EntryService::from_store(repository.open_store()?))
    }

    pub fn from_store(store: EntryStore) -> Self {
        EntryService {
            store,
            session: EditorSession::new(),
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Status line left by the last operation
    pub fn status(&self) -> &str {
        self.session.status()
    }

    /// Newest-first listing, optionally cut to `limit` entries
    pub fn list(&self, limit: Option<usize>) -> Vec<(&EntryId, &Entry)> {
        let mut listed = self.store.list_sorted();
        if let Some(limit) = limit {
            listed.truncate(limit);
        }
        listed
    }

    pub fn show(&self, reference: &EntryRef) -> Result<(EntryId, &Entry)> {
        let id = self.store.resolve(reference)?;
        let entry = self
            .store
            .get(&id)
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))?;
        Ok((id, entry))
    }

    /// Create a new entry and persist it
    pub fn add(&mut self, title: &str, content: &str, now: DateTime<Local>) -> Result<SaveOutcome> {
        self.session.new_entry();
        self.session.set_title(title);
        self.session.set_content(content);
        self.session.save(&mut self.store, now)
    }

    /// Update an entry in place. `None` keeps the field's current text.
    pub fn edit(
        &mut self,
        reference: &EntryRef,
        title: Option<&str>,
        content: Option<&str>,
        now: DateTime<Local>,
    ) -> Result<SaveOutcome> {
        let id = self.store.resolve(reference)?;
        self.session.select(&self.store, &id)?;

        if let Some(title) = title {
            self.session.set_title(title);
        }
        if let Some(content) = content {
            self.session.set_content(content);
        }

        self.session.save(&mut self.store, now)
    }

    /// Delete an entry and persist the store
    pub fn delete(&mut self, reference: &EntryRef) -> Result<(EntryId, Entry)> {
        let id = self.store.resolve(reference)?;
        let removed = self.session.delete(&mut self.store, &id)?;
        Ok((id, removed))
    }
}
