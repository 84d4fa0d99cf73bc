//! Backup snapshots and wholesale restore.
//!
//! A backup copies a set of files into `<backups>/<slug>/` preserving their
//! working-root-relative paths. Snapshots are create-once, read-many: nothing
//! mutates a snapshot after it is taken, and restore copies every entry back
//! over the current tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::WorkbenchError;
use crate::io::paths::WorkbenchPaths;

/// One backed-up file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// Path the file was copied from (and restores to).
    pub original: PathBuf,
    /// Path of the copy inside the snapshot directory.
    pub backup: PathBuf,
}

/// A completed snapshot. Immutable after creation.
#[derive(Debug, Clone)]
pub struct BackupSet {
    /// Timestamp-derived identifier naming the snapshot directory.
    pub slug: String,
    pub dir: PathBuf,
    pub entries: Vec<BackupEntry>,
}

/// Snapshot `files` into a fresh timestamped directory under the backup root.
///
/// Paths may be absolute or working-root-relative; anything that is not
/// currently a regular file is skipped, and a file outside the working root
/// is an error. The slug is `YYYYMMDD-HHMMSS`; when a directory with that
/// name already exists (a second backup within the same second) a `-2`, `-3`,
/// … suffix disambiguates instead of merging into the earlier snapshot.
pub fn backup_files(paths: &WorkbenchPaths, files: &[PathBuf]) -> Result<BackupSet> {
    fs::create_dir_all(&paths.backups_dir)
        .with_context(|| format!("create backup root {}", paths.backups_dir.display()))?;

    let base_slug = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let (slug, dir) = create_snapshot_dir(&paths.backups_dir, &base_slug)?;

    let mut entries = Vec::new();
    for file in files {
        let original = if file.is_absolute() {
            file.clone()
        } else {
            paths.root.join(file)
        };
        if !original.is_file() {
            debug!(path = %original.display(), "skipping non-file backup target");
            continue;
        }
        let rel = original.strip_prefix(&paths.root).map_err(|_| {
            anyhow!(
                "backup target outside working root: {}",
                original.display()
            )
        })?;
        let backup = dir.join(rel);
        if let Some(parent) = backup.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::copy(&original, &backup)
            .with_context(|| format!("copy {} into snapshot", original.display()))?;
        entries.push(BackupEntry { original, backup });
    }

    info!(slug = %slug, files = entries.len(), "backup created");
    Ok(BackupSet { slug, dir, entries })
}

fn create_snapshot_dir(backups_dir: &Path, base_slug: &str) -> Result<(String, PathBuf)> {
    let mut attempt: u32 = 1;
    loop {
        let slug = if attempt == 1 {
            base_slug.to_string()
        } else {
            format!("{base_slug}-{attempt}")
        };
        let dir = backups_dir.join(&slug);
        match fs::create_dir(&dir) {
            Ok(()) => return Ok((slug, dir)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("create snapshot dir {}", dir.display()));
            }
        }
    }
}

/// Copy every file in a snapshot back to its original location.
///
/// Parent directories are recreated as needed and current content is
/// overwritten. Returns the number of files restored. A missing snapshot
/// directory is a [`WorkbenchError::BackupNotFound`] and restores nothing.
pub fn restore_backup(paths: &WorkbenchPaths, backup_dir: &Path) -> Result<usize> {
    if !backup_dir.is_dir() {
        return Err(WorkbenchError::BackupNotFound(backup_dir.to_path_buf()).into());
    }

    let mut restored = 0;
    for entry in WalkDir::new(backup_dir) {
        let entry =
            entry.with_context(|| format!("walk snapshot {}", backup_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(backup_dir)
            .with_context(|| format!("snapshot entry outside {}", backup_dir.display()))?;
        let dest = paths.root.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("restore {}", dest.display()))?;
        restored += 1;
    }

    info!(restored, backup = %backup_dir.display(), "backup restored");
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_file, write_file};

    #[test]
    fn backup_then_restore_reproduces_original_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        write_file(&paths.root, "a.txt", "original a");
        write_file(&paths.root, "nested/b.txt", "original b");

        let set = backup_files(
            &paths,
            &[paths.root.join("a.txt"), paths.root.join("nested/b.txt")],
        )
        .expect("backup");
        assert_eq!(set.entries.len(), 2);

        write_file(&paths.root, "a.txt", "mutated");
        fs::remove_file(paths.root.join("nested/b.txt")).expect("remove");

        let restored = restore_backup(&paths, &set.dir).expect("restore");

        assert_eq!(restored, 2);
        assert_eq!(read_file(&paths.root, "a.txt"), "original a");
        assert_eq!(read_file(&paths.root, "nested/b.txt"), "original b");
    }

    #[test]
    fn backup_preserves_root_relative_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        write_file(&paths.root, "src/deep/c.rs", "code");

        let set = backup_files(&paths, &[PathBuf::from("src/deep/c.rs")]).expect("backup");

        assert_eq!(set.entries.len(), 1);
        assert_eq!(set.entries[0].backup, set.dir.join("src/deep/c.rs"));
        assert!(set.entries[0].backup.is_file());
    }

    #[test]
    fn non_files_are_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        fs::create_dir_all(paths.root.join("a_dir")).expect("mkdir");

        let set = backup_files(
            &paths,
            &[paths.root.join("a_dir"), paths.root.join("missing.txt")],
        )
        .expect("backup");

        assert!(set.entries.is_empty());
    }

    #[test]
    fn file_outside_working_root_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outside = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        let stray = outside.path().join("stray.txt");
        fs::write(&stray, "stray").expect("write");

        let err = backup_files(&paths, &[stray]).unwrap_err();
        assert!(err.to_string().contains("outside working root"));
    }

    #[test]
    fn same_second_backups_get_distinct_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        write_file(&paths.root, "a.txt", "a");

        let first = backup_files(&paths, &[PathBuf::from("a.txt")]).expect("first");
        let second = backup_files(&paths, &[PathBuf::from("a.txt")]).expect("second");

        assert_ne!(first.dir, second.dir);
        assert!(first.dir.is_dir());
        assert!(second.dir.is_dir());
    }

    #[test]
    fn restore_of_missing_snapshot_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = WorkbenchPaths::new(temp.path());
        let missing = paths.backups_dir.join("20000101-000000");

        let err = restore_backup(&paths, &missing).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WorkbenchError>(),
            Some(WorkbenchError::BackupNotFound(path)) if *path == missing
        ));
    }
}
