//! Structural engine failures.
//!
//! Per-file problems (an unreadable file during a scan, count, or apply) are
//! not errors: batch operations record them as skips and continue. The
//! failures here are structural: they abort the requested operation and are
//! never swallowed. They are returned inside [`anyhow::Error`] so call sites
//! keep their context chains; callers that need to branch on the kind can
//! `downcast_ref::<WorkbenchError>()`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an engine operation.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// Rollback was requested against a backup directory that does not exist.
    #[error("backup directory not found: {}", .0.display())]
    BackupNotFound(PathBuf),

    /// A structured patch was requested on a document format the engine
    /// cannot handle (unknown extension, or YAML without the `yaml` feature).
    #[error("unsupported document format for {}: {}", .path.display(), .detail)]
    UnsupportedFormat { path: PathBuf, detail: String },
}
