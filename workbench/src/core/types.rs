//! Shared deterministic types for engine core logic.
//!
//! These types define stable contracts between the scanner, the replacement
//! engine, and the structured patch engine. They carry no I/O state and must
//! remain deterministic across runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A candidate file produced by the repo scanner.
///
/// Immutable once produced; scoped to one plan/apply cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the scanned root.
    pub rel_path: PathBuf,
}

impl FileHandle {
    /// Build a handle for `path` under `root`.
    ///
    /// Returns `None` when `path` is not under `root`.
    pub fn new(root: &Path, path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let rel_path = path.strip_prefix(root).ok()?.to_path_buf();
        Some(Self { path, rel_path })
    }
}

/// A literal search/replace pair extracted from one user instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan {
    search: String,
    replace: String,
}

impl ReplacementPlan {
    /// Create a plan. Returns `None` when `search` is empty: replacing the
    /// empty string is never meaningful and would match everywhere.
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Option<Self> {
        let search = search.into();
        if search.is_empty() {
            return None;
        }
        Some(Self {
            search,
            replace: replace.into(),
        })
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }
}

/// Per-file count of literal substring matches for a pending replacement.
///
/// Entries keep insertion order (the scanner's deterministic order), hold only
/// positive counts, and `total()` always equals the sum of the entry counts.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceMap {
    entries: Vec<(FileHandle, usize)>,
}

impl OccurrenceMap {
    /// Record `count` occurrences for `file`. Zero counts are not stored.
    pub fn insert(&mut self, file: FileHandle, count: usize) {
        if count > 0 {
            self.entries.push((file, count));
        }
    }

    /// Total matches across all files.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of files with at least one match.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FileHandle, usize)> {
        self.entries.iter().map(|(file, count)| (file, *count))
    }
}

/// Operation kind for a structured document change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    #[default]
    Set,
    Delete,
}

/// One dotted-path mutation of a structured document.
///
/// Serialized form matches the external change-list representation:
/// `{"op": "set", "key": "a.b.c", "value": 5}`. `op` defaults to `set` and
/// `value` is ignored for `delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditChange {
    #[serde(default)]
    pub op: EditOp,
    /// Dotted path of non-empty segments, one per mapping level.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl EditChange {
    pub fn set(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            op: EditOp::Set,
            key: key.into(),
            value: Some(value),
        }
    }

    pub fn delete(key: impl Into<String>) -> Self {
        Self {
            op: EditOp::Delete,
            key: key.into(),
            value: None,
        }
    }
}

/// A file a batch operation passed over because it could not be read or
/// written. Skips never affect aggregate counts; callers decide whether an
/// aggregate of skips should surface as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}
