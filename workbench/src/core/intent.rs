//! Literal replacement-intent extraction from free-form instructions.
//!
//! Only the minimal `replace "X" with "Y"` pattern is recognized. Anything
//! looser (semantic interpretation of the instruction) belongs to the caller;
//! a `None` here means "try another strategy", not failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::ReplacementPlan;

static REPLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)replace\s+["'](.+?)["']\s+with\s+["'](.+?)["']"#)
        .expect("replace intent regex")
});

/// Extract a literal search/replace pair from an instruction.
///
/// Case-insensitive, accepts single or double quotes, and uses only the first
/// match when the instruction contains several.
pub fn parse_intent(prompt: &str) -> Option<ReplacementPlan> {
    let caps = REPLACE_RE.captures(prompt)?;
    ReplacementPlan::new(&caps[1], &caps[2])
}
