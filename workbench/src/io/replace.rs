//! Replacement engine: count, preview, and apply literal substitutions.
//!
//! Batch operations never abort on a bad file: unreadable or unwritable files
//! are recorded as skips and the remaining files are processed. Aggregate
//! counts exclude skipped files.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::diff::unified_diff;
use crate::core::replace::{count_occurrences, substitute};
use crate::core::types::{FileHandle, OccurrenceMap, ReplacementPlan, SkippedFile};

/// Result of the counting pass over scanned files.
#[derive(Debug, Clone, Default)]
pub struct PlanReport {
    /// Files with at least one match, in scan order.
    pub occurrences: OccurrenceMap,
    /// Files that could not be read. Not reflected in occurrence totals.
    pub skipped: Vec<SkippedFile>,
}

/// One rendered preview diff.
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: PathBuf,
    pub diff: String,
}

/// Result of applying a replacement plan.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    /// Number of files actually rewritten.
    pub changed_files: usize,
    /// Files that could not be read or written back.
    pub skipped: Vec<SkippedFile>,
}

/// Count occurrences of the plan's search string across `files`.
///
/// Files that cannot be read as text are skipped and the pass continues; a
/// completely unreadable set yields an empty occurrence map.
pub fn plan_replacements(files: &[FileHandle], plan: &ReplacementPlan) -> PlanReport {
    let mut report = PlanReport::default();
    for file in files {
        let text = match fs::read_to_string(&file.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %file.path.display(), error = %err, "skipping unreadable file");
                report.skipped.push(SkippedFile {
                    path: file.path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        report
            .occurrences
            .insert(file.clone(), count_occurrences(plan, &text));
    }
    debug!(
        files = report.occurrences.len(),
        matches = report.occurrences.total(),
        skipped = report.skipped.len(),
        "replacement plan computed"
    );
    report
}

/// Render unified diffs for up to `limit` files from the occurrence map.
///
/// The limit bounds the number of files examined (in map order), not the
/// number of diffs emitted: a file whose substitution produces no visible
/// change still consumes one slot. Unreadable files are passed over.
pub fn preview_diffs(
    occurrences: &OccurrenceMap,
    plan: &ReplacementPlan,
    limit: usize,
) -> Vec<FileDiff> {
    let mut diffs = Vec::new();
    for (file, _) in occurrences.iter().take(limit) {
        let Ok(text) = fs::read_to_string(&file.path) else {
            continue;
        };
        let new_text = substitute(plan, &text);
        if let Some(diff) = unified_diff(&file.path.display().to_string(), &text, &new_text) {
            diffs.push(FileDiff {
                path: file.path.clone(),
                diff,
            });
        }
    }
    diffs
}

/// Apply the plan to every file in the occurrence map.
///
/// Files are written back only when the substitution changes their content,
/// so applying the same plan twice rewrites zero files on the second pass.
pub fn apply_replacements(occurrences: &OccurrenceMap, plan: &ReplacementPlan) -> ApplyReport {
    let mut report = ApplyReport::default();
    for (file, _) in occurrences.iter() {
        let text = match fs::read_to_string(&file.path) {
            Ok(text) => text,
            Err(err) => {
                report.skipped.push(SkippedFile {
                    path: file.path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        let new_text = substitute(plan, &text);
        if new_text == text {
            continue;
        }
        match fs::write(&file.path, new_text) {
            Ok(()) => report.changed_files += 1,
            Err(err) => report.skipped.push(SkippedFile {
                path: file.path.clone(),
                reason: err.to_string(),
            }),
        }
    }
    debug!(
        changed = report.changed_files,
        skipped = report.skipped.len(),
        "replacements applied"
    );
    report
}
