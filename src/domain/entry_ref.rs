//! Entry reference parsing

use crate::domain::EntryId;
use crate::error::{DiaryError, Result};

/// How the user names an entry on the command line or in the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    /// 1-based position in the newest-first listing
    Position(usize),
    /// Entry id as stored in the journal file
    Id(EntryId),
}

impl EntryRef {
    /// Parse a reference. All-digit input is a list position, anything else an id.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(DiaryError::InvalidReference(input.to_string()));
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse::<usize>() {
                Ok(0) | Err(_) => Err(DiaryError::InvalidReference(input.to_string())),
                Ok(position) => Ok(EntryRef::Position(position)),
            };
        }

        Ok(EntryRef::Id(EntryId::new(trimmed)))
    }
}
