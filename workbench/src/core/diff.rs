//! Unified diff rendering for edit previews.

use similar::TextDiff;

/// Render a unified diff between two versions of a file.
///
/// Headers name the original `label` (conventionally the file path) and a
/// synthetic `"<label> (after)"` for the modified version. Returns `None`
/// when the texts are identical, since previews must only show real changes.
pub fn unified_diff(label: &str, original: &str, modified: &str) -> Option<String> {
    if original == modified {
        return None;
    }
    let rendered = TextDiff::from_lines(original, modified)
        .unified_diff()
        .header(label, &format!("{label} (after)"))
        .to_string();
    Some(rendered)
}
