//! Test-only helpers for building temporary repository trees.

use std::fs;
use std::path::Path;

use crate::core::types::FileHandle;

/// Write `contents` at `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write test file");
}

/// Read the file at `rel` under `root`.
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).expect("read test file")
}

/// Handle for a file at `rel` under `root`.
pub fn handle(root: &Path, rel: &str) -> FileHandle {
    FileHandle::new(root, root.join(rel)).expect("file handle under root")
}
