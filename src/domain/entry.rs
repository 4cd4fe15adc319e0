//! Diary entry model and the two domain validations

use crate::error::{DiaryError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Titles longer than this are cut in the entry list
pub const TITLE_DISPLAY_CHARS: usize = 30;

/// Display format for entry dates
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Identifier keying an entry in the store (`entry_<unix seconds>`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    /// Base id for an entry created at the given unix time
    pub fn from_unix_seconds(seconds: i64) -> Self {
        EntryId(format!("entry_{}", seconds))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored diary entry. The id is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl Entry {
    pub fn new(title: String, content: String, timestamp: NaiveDateTime) -> Self {
        Entry {
            title,
            content,
            timestamp,
        }
    }

    /// Timestamp formatted for display (`YYYY-MM-DD HH:MM`)
    pub fn display_date(&self) -> String {
        self.timestamp.format(DATE_DISPLAY_FORMAT).to_string()
    }

    /// Title cut to 30 characters with a trailing `...` when longer
    pub fn short_title(&self) -> String {
        truncate_title(&self.title)
    }

    /// One line of the entry list: `<date> - <short title>`
    pub fn list_label(&self) -> String {
        format!("{} - {}", self.display_date(), self.short_title())
    }
}

/// Cut a title to [`TITLE_DISPLAY_CHARS`] characters, appending `...` if anything was dropped.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_DISPLAY_CHARS {
        let head: String = title.chars().take(TITLE_DISPLAY_CHARS).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

/// Title and content that passed validation, already trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
}

impl EntryDraft {
    /// Trim both fields and reject blanks. The title is checked first.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(DiaryError::MissingTitle);
        }
        if content.is_empty() {
            return Err(DiaryError::MissingContent);
        }

        Ok(EntryDraft {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn into_entry(self, timestamp: NaiveDateTime) -> Entry {
        Entry::new(self.title, self.content, timestamp)
    }
}
