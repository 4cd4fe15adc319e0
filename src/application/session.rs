//! Editor session: the entry being edited and its unsaved buffers
//!
//! Operations that read or write entries take the store as an argument.

use crate::domain::entry::DATE_DISPLAY_FORMAT;
use crate::domain::{Entry, EntryId};
use crate::error::{DiaryError, Result};
use crate::infrastructure::EntryStore;
use chrono::{DateTime, Local};

/// Coarse state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No bound entry and both buffers blank
    Empty,
    /// Bound to an entry, or holding text for a new one
    Editing,
}

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntryId),
    Updated(EntryId),
}

impl SaveOutcome {
    pub fn id(&self) -> &EntryId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    current: Option<EntryId>,
    title: String,
    content: String,
    status: String,
}

impl EditorSession {
    pub fn new() -> Self {
        EditorSession {
            current: None,
            title: String::new(),
            content: String::new(),
            status: "Ready".to_string(),
        }
    }

    pub fn state(&self) -> SessionState {
        let blank = self.title.trim().is_empty() && self.content.trim().is_empty();
        if self.current.is_none() && blank {
            SessionState::Empty
        } else {
            SessionState::Editing
        }
    }

    pub fn current_id(&self) -> Option<&EntryId> {
        self.current.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text of the status line, echoing the last action
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Add one line to the content buffer
    pub fn append_line(&mut self, line: &str) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(line);
    }

    /// Drop the binding and blank the buffers
    pub fn new_entry(&mut self) {
        self.blank_buffers();
        self.current = None;
        self.status = "New entry ready".to_string();
    }

    /// Blank the buffers. The bound entry stays bound, so the next save
    /// still targets it.
    pub fn clear(&mut self) {
        self.blank_buffers();
        self.status = "Fields cleared".to_string();
    }

    /// Bind to `id` and load its fields into the buffers
    pub fn select(&mut self, store: &EntryStore, id: &EntryId) -> Result<()> {
        let entry = store
            .get(id)
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))?;

        self.current = Some(id.clone());
        self.title = entry.title.clone();
        self.content = entry.content.clone();
        self.status = format!("Loaded entry: {}", entry.title);
        Ok(())
    }

    /// Save the buffers and persist the store.
    ///
    /// Validation failures leave the store and the session untouched. When
    /// persisting fails the in-memory entry and the new binding are kept and
    /// the I/O error is returned.
    pub fn save(&mut self, store: &mut EntryStore, now: DateTime<Local>) -> Result<SaveOutcome> {
        let id = store.save(self.current.as_ref(), &self.title, &self.content, now)?;
        let title = store
            .get(&id)
            .map(|entry| entry.title.clone())
            .unwrap_or_default();

        let outcome = if self.current.is_some() {
            self.status = format!("Updated entry: {}", title);
            SaveOutcome::Updated(id.clone())
        } else {
            self.status = format!("Saved new entry: {}", title);
            SaveOutcome::Created(id.clone())
        };
        self.current = Some(id);

        store.persist()?;
        Ok(outcome)
    }

    /// Delete `id` from the store and persist. Deleting the bound entry
    /// returns the session to [`SessionState::Empty`].
    pub fn delete(&mut self, store: &mut EntryStore, id: &EntryId) -> Result<Entry> {
        let removed = store.delete(id)?;

        if self.current.as_ref() == Some(id) {
            self.blank_buffers();
            self.current = None;
        }

        store.persist()?;
        self.status = format!("Deleted entry: {}", removed.title);
        Ok(removed)
    }

    /// `Date: ...` line for the editor: the bound entry's timestamp, or `now`
    pub fn date_label(&self, store: &EntryStore, now: DateTime<Local>) -> String {
        let stamp = self
            .current
            .as_ref()
            .and_then(|id| store.get(id))
            .map(|entry| entry.display_date())
            .unwrap_or_else(|| now.format(DATE_DISPLAY_FORMAT).to_string());
        format!("Date: {}", stamp)
    }

    fn blank_buffers(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        EditorSession::new()
    }
}
