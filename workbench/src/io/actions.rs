//! Direct file-manipulation primitives for edit sessions.
//!
//! Callers gate these behind their own confirmation flow; the engine only
//! performs the mutation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Write `contents` at `path`, creating parent directories.
///
/// Overwrites an existing file; callers that want create-only semantics check
/// existence first.
pub fn add_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    debug!(path = %path.display(), "writing file");
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// Move a file to `dst`, creating destination parent directories.
///
/// Falls back to copy + remove when a plain rename fails (e.g. across
/// filesystems).
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    debug!(src = %src.display(), dst = %dst.display(), "moving file");
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    fs::copy(src, dst)
        .with_context(|| format!("copy {} to {}", src.display(), dst.display()))?;
    fs::remove_file(src).with_context(|| format!("remove {}", src.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::read_file;

    #[test]
    fn add_file_creates_parent_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("new_folder/calculator.py");

        add_file(&path, "print('hi')\n").expect("add");

        assert_eq!(read_file(temp.path(), "new_folder/calculator.py"), "print('hi')\n");
    }

    #[test]
    fn move_file_relocates_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = temp.path().join("old.txt");
        let dst = temp.path().join("moved/new.txt");
        fs::write(&src, "payload").expect("write");

        move_file(&src, &dst).expect("move");

        assert!(!src.exists());
        assert_eq!(read_file(temp.path(), "moved/new.txt"), "payload");
    }

    #[test]
    fn move_of_missing_source_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let src = temp.path().join("absent.txt");
        let dst = temp.path().join("dst.txt");

        assert!(move_file(&src, &dst).is_err());
    }
}
