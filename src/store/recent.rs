//! Most-recently-used file list.

use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::model::RecentFile;

use super::KeyValueStore;

const RECENT_FILES_KEY: &str = "recent_files";

/// Maximum number of entries kept in the list.
pub const MAX_RECENT_FILES: usize = 5;

/// Most-recently-used file list, newest first.
#[derive(Debug, Clone, Default)]
pub struct RecentFiles {
    entries: Vec<RecentFile>,
}

impl RecentFiles {
    /// Load the list from the store. A corrupt payload degrades to an empty
    /// list rather than an error.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let entries = match store.get(RECENT_FILES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("recent file list is corrupt, starting empty: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self { entries })
    }

    /// Persist the list to the store.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        store.set(RECENT_FILES_KEY, &raw)
    }

    /// Record that `path` was just opened: any existing entry for it moves to
    /// the front, and the oldest entry past the capacity is dropped.
    pub fn record(&mut self, path: impl AsRef<Path>) -> &RecentFile {
        let path = path.as_ref();
        self.entries.retain(|e| e.path != path);
        self.entries.insert(0, RecentFile::new(path, Utc::now()));
        self.entries.truncate(MAX_RECENT_FILES);
        &self.entries[0]
    }

    /// Remove the entry for `path`, if present.
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.entries.retain(|e| e.path != path);
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[RecentFile] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
