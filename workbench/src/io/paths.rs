//! Canonical engine-owned paths under `<root>/.workbench/`.
//!
//! Engine entry points take an explicit [`WorkbenchPaths`] instead of relying
//! on ambient process state, so tests can point the engine at temporary
//! directories.

use std::path::{Path, PathBuf};

/// Directory name for engine-owned state under the working root.
///
/// Also part of the scanner's exclusion floor: the engine never edits or
/// backs up its own state.
pub const STATE_DIR_NAME: &str = ".workbench";

/// All canonical engine paths for a working root.
#[derive(Debug, Clone)]
pub struct WorkbenchPaths {
    /// The working root every edit session operates against.
    pub root: PathBuf,
    pub workbench_dir: PathBuf,
    pub state_dir: PathBuf,
    pub backups_dir: PathBuf,
    pub config_path: PathBuf,
}

impl WorkbenchPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let workbench_dir = root.join(STATE_DIR_NAME);
        let state_dir = workbench_dir.join("state");
        let backups_dir = workbench_dir.join("backups");
        Self {
            root,
            workbench_dir,
            state_dir: state_dir.clone(),
            backups_dir,
            config_path: state_dir.join("config.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_under_state_dir() {
        let paths = WorkbenchPaths::new("/repo");
        assert_eq!(paths.workbench_dir, Path::new("/repo/.workbench"));
        assert_eq!(paths.backups_dir, Path::new("/repo/.workbench/backups"));
        assert_eq!(
            paths.config_path,
            Path::new("/repo/.workbench/state/config.toml")
        );
    }
}
