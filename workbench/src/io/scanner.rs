//! Repo scanning: ordered, deduplicated file enumeration by glob patterns.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::core::types::FileHandle;
use crate::io::paths::STATE_DIR_NAME;

/// Directory names never scanned, at any path depth.
///
/// Version-control metadata, dependency caches, and the engine's own state
/// directory. This is a safety floor: callers may override the include
/// patterns but not this set.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "target",
    "node_modules",
    "__pycache__",
    ".venv",
    STATE_DIR_NAME,
];

const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.rs",
    "**/*.py",
    "**/*.md",
    "**/*.txt",
    "**/*.json",
    "**/*.yaml",
    "**/*.yml",
    "**/*.toml",
];

/// Default include globs: common text/source extensions.
pub fn default_includes() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|p| (*p).to_string()).collect()
}

/// Enumerate candidate files under `root`.
///
/// Patterns are evaluated in order and the result is deduplicated with
/// first-match-wins ordering; within one pattern the glob walk is
/// alphabetical, so repeated scans of an unchanged tree yield an identical
/// sequence. Only regular files are returned, and any file with an
/// [`EXCLUDED_DIRS`] component in its root-relative path is skipped.
/// Unreadable directories and invalid patterns contribute nothing rather
/// than failing the scan.
pub fn scan_repo(root: &Path, includes: &[String]) -> Vec<FileHandle> {
    debug!(root = %root.display(), patterns = includes.len(), "scanning repo");
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in includes {
        let full_pattern = root.join(pattern);
        let Ok(paths) = glob::glob(&full_pattern.to_string_lossy()) else {
            debug!(pattern = %pattern, "skipping invalid glob pattern");
            continue;
        };
        for path in paths.flatten() {
            if !path.is_file() {
                continue;
            }
            let Some(handle) = FileHandle::new(root, path) else {
                continue;
            };
            if is_excluded(&handle.rel_path) {
                continue;
            }
            if seen.insert(handle.path.clone()) {
                files.push(handle);
            }
        }
    }

    debug!(files = files.len(), "scan complete");
    files
}

fn is_excluded(rel_path: &Path) -> bool {
    rel_path.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        EXCLUDED_DIRS.iter().any(|dir| name == *dir)
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_support::write_file;

    #[test]
    fn scan_returns_only_matching_regular_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_file(root, "a.txt", "a");
        write_file(root, "src/b.rs", "b");
        write_file(root, "image.bin", "not text");

        let files = scan_repo(root, &default_includes());
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.clone()).collect();

        assert!(rels.contains(&PathBuf::from("a.txt")));
        assert!(rels.contains(&PathBuf::from("src/b.rs")));
        assert!(!rels.contains(&PathBuf::from("image.bin")));
    }

    #[test]
    fn excluded_directories_are_skipped_at_any_depth() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_file(root, ".git/config.txt", "vc");
        write_file(root, "vendor/target/deep/cache.txt", "cache");
        write_file(root, ".workbench/state/config.toml", "state");
        write_file(root, "kept.txt", "kept");

        let files = scan_repo(root, &default_includes());
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.clone()).collect();

        assert_eq!(rels, vec![PathBuf::from("kept.txt")]);
    }

    #[test]
    fn files_matching_multiple_patterns_appear_once_in_first_match_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_file(root, "b.txt", "b");
        write_file(root, "a.md", "a");

        let includes = vec!["**/*.txt".to_string(), "**/*.md".to_string(), "**/b.*".to_string()];
        let files = scan_repo(root, &includes);
        let rels: Vec<_> = files.iter().map(|f| f.rel_path.clone()).collect();

        // b.txt matched by both the first and third pattern; kept once at its
        // first-pattern position.
        assert_eq!(rels, vec![PathBuf::from("b.txt"), PathBuf::from("a.md")]);
    }

    #[test]
    fn repeated_scans_yield_identical_sequences() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_file(root, "c.txt", "c");
        write_file(root, "a.txt", "a");
        write_file(root, "nested/b.txt", "b");

        let first = scan_repo(root, &default_includes());
        let second = scan_repo(root, &default_includes());
        assert_eq!(first, second);
    }
}
