//! Repository-aware text-editing engine.
//!
//! This crate scans a file tree, infers a literal search/replace intent,
//! previews the exact effect as unified diffs, and applies edits with a
//! recoverable backup. Structured documents (JSON/YAML) are mutated through
//! dotted-path change lists. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (intent parsing, occurrence
//!   counting, diff rendering, dotted-path mutation). No I/O, fully testable
//!   in isolation.
//! - **[`io`]**: Side-effecting operations (scanning, applying replacements,
//!   patching documents, backup/restore). Isolated so tests run against
//!   temporary directories.
//!
//! Callers (CLI, HTTP handlers, agent hosts) own all user-visible output and
//! confirmation steps; the engine exposes return values and typed failures
//! only. The engine is single-threaded and synchronous; run one edit session
//! at a time against a given tree.

pub mod core;
pub mod error;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
