//! JSON-backed entry store

use crate::domain::{Entry, EntryDraft, EntryId, EntryRef};
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// What `load` does when the journal file exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Start with an empty store; the next save overwrites the file
    #[default]
    Empty,
    /// Refuse to load
    Fail,
}

impl FromStr for CorruptPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(CorruptPolicy::Empty),
            "fail" => Ok(CorruptPolicy::Fail),
            _ => Err(format!(
                "Invalid on_corrupt policy: '{}'. Valid policies are: empty, fail",
                s
            )),
        }
    }
}

/// In-memory mapping of entries plus the file it is persisted to.
///
/// `load` and `persist` are the only calls that touch the disk. Mutations
/// (`save`, `delete`) only change memory until `persist` is called, and a
/// failed `persist` leaves memory as it was.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: BTreeMap<EntryId, Entry>,
    recovered_from_corrupt: bool,
}

impl EntryStore {
    /// Empty store bound to `path`, nothing read
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EntryStore {
            path: path.into(),
            entries: BTreeMap::new(),
            recovered_from_corrupt: false,
        }
    }

    /// Read the journal file. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>, policy: CorruptPolicy) -> Result<Self> {
        let mut store = EntryStore::new(path);

        let bytes = match fs::read(&store.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %store.path.display(), "no journal file yet");
                return Ok(store);
            }
            Err(e) => return Err(DiaryError::Io(e)),
        };

        match serde_json::from_slice::<BTreeMap<EntryId, Entry>>(&bytes) {
            Ok(entries) => {
                debug!(path = %store.path.display(), count = entries.len(), "loaded entries");
                store.entries = entries;
            }
            Err(source) => match policy {
                CorruptPolicy::Empty => {
                    warn!(
                        path = %store.path.display(),
                        error = %source,
                        "journal file is unreadable; starting with an empty journal"
                    );
                    store.recovered_from_corrupt = true;
                }
                CorruptPolicy::Fail => {
                    return Err(DiaryError::CorruptStore {
                        path: store.path.clone(),
                        source,
                    });
                }
            },
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when `load` found an unparsable file and fell back to empty
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered_from_corrupt
    }

    pub fn entries(&self) -> &BTreeMap<EntryId, Entry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries newest first; equal timestamps fall back to id order
    pub fn list_sorted(&self) -> Vec<(&EntryId, &Entry)> {
        let mut listed: Vec<(&EntryId, &Entry)> = self.entries.iter().collect();
        listed.sort_by(|(a_id, a), (b_id, b)| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| a_id.cmp(b_id))
        });
        listed
    }

    /// Resolve a list position or id to an id present in the store
    pub fn resolve(&self, reference: &EntryRef) -> Result<EntryId> {
        match reference {
            EntryRef::Position(position) => position
                .checked_sub(1)
                .and_then(|index| self.list_sorted().get(index).map(|(id, _)| (*id).clone()))
                .ok_or_else(|| DiaryError::EntryNotFound(position.to_string())),
            EntryRef::Id(id) => {
                if self.contains(id) {
                    Ok(id.clone())
                } else {
                    Err(DiaryError::EntryNotFound(id.to_string()))
                }
            }
        }
    }

    /// Create or overwrite an entry in memory and return its id.
    ///
    /// Title and content are trimmed; either one blank fails validation and
    /// leaves the store untouched. With `id` the entry under that key is
    /// replaced (inserted if absent), otherwise a fresh id is minted from `now`.
    pub fn save(
        &mut self,
        id: Option<&EntryId>,
        title: &str,
        content: &str,
        now: DateTime<Local>,
    ) -> Result<EntryId> {
        let draft = EntryDraft::new(title, content)?;
        let timestamp = now.naive_local().trunc_subsecs(6);

        let id = match id {
            Some(id) => id.clone(),
            None => self.mint_id(now),
        };

        debug!(id = %id, "saving entry");
        self.entries.insert(id.clone(), draft.into_entry(timestamp));
        Ok(id)
    }

    /// Remove an entry from memory, returning it
    pub fn delete(&mut self, id: &EntryId) -> Result<Entry> {
        let removed = self
            .entries
            .remove(id)
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))?;
        debug!(id = %id, "deleted entry");
        Ok(removed)
    }

    /// Rewrite the whole journal file from memory.
    ///
    /// The JSON goes to a temp file beside the target first and is then
    /// renamed into place.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.diary-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("diary_entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, json)?;

        // rename does not replace an existing file on Windows
        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }

        info!(path = %self.path.display(), count = self.entries.len(), "persisted entries");
        Ok(())
    }

    /// `entry_<unix seconds>`, suffixed `_2`, `_3`, ... if that key is taken
    fn mint_id(&self, now: DateTime<Local>) -> EntryId {
        let base = EntryId::from_unix_seconds(now.timestamp());
        if !self.contains(&base) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = EntryId::new(format!("{}_{}", base, n));
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
