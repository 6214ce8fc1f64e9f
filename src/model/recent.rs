//! Recently opened files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in the most-recently-used file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFile {
    /// Path of the file as the caller supplied it
    pub path: PathBuf,

    /// Display name (final path component)
    pub name: String,

    /// When the file was last opened
    pub opened_at: DateTime<Utc>,
}

impl RecentFile {
    /// Create an entry for `path`, deriving the display name from it.
    pub fn new(path: impl Into<PathBuf>, opened_at: DateTime<Utc>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            opened_at,
        }
    }
}

/// Derive a human-readable name from the final path component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Unknown File".to_string())
}
