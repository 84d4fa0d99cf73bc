//! Structured patch engine for JSON and YAML documents.
//!
//! Applies an ordered change list of dotted-path set/delete operations to a
//! document on disk. Both formats parse into the same in-memory tree
//! ([`serde_json::Value`]) so the op semantics in [`crate::core::patch`] are
//! shared; only the parse/serialize backend differs. YAML support is behind
//! the `yaml` cargo feature; patching a YAML document without it is a hard
//! [`WorkbenchError::UnsupportedFormat`], never a silent fallback to JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::diff::unified_diff;
use crate::core::patch::apply_changes;
use crate::core::types::EditChange;
use crate::error::WorkbenchError;

/// Serialization backend for a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// Determine the document format from the file extension.
pub fn document_format(path: &Path) -> Result<DocumentFormat> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => Ok(DocumentFormat::Json),
        Some("yaml") | Some("yml") => yaml_format(path),
        _ => Err(WorkbenchError::UnsupportedFormat {
            path: path.to_path_buf(),
            detail: "expected a .json, .yaml, or .yml extension".to_string(),
        }
        .into()),
    }
}

#[cfg(feature = "yaml")]
fn yaml_format(_path: &Path) -> Result<DocumentFormat> {
    Ok(DocumentFormat::Yaml)
}

#[cfg(not(feature = "yaml"))]
fn yaml_format(path: &Path) -> Result<DocumentFormat> {
    Err(WorkbenchError::UnsupportedFormat {
        path: path.to_path_buf(),
        detail: "YAML support not compiled in (enable the `yaml` feature)".to_string(),
    }
    .into())
}

/// Apply `changes` to the document at `path` in place.
///
/// An absent or unparsable document starts from an empty mapping. The final
/// tree is serialized back in the document's own format and written with a
/// temp-file + rename.
pub fn patch_document(path: &Path, changes: &[EditChange]) -> Result<()> {
    let format = document_format(path)?;
    let mut tree = load_tree(path, format);
    apply_changes(&mut tree, changes);
    let contents = serialize_tree(format, &tree)?;
    write_atomic(path, &contents)?;
    debug!(path = %path.display(), changes = changes.len(), "document patched");
    Ok(())
}

/// Render the effect of `changes` as a unified diff without touching disk.
///
/// Applies the change list to an in-memory copy of the document and diffs the
/// result against the current serialized form. Returns `None` when the
/// changes have no visible effect.
pub fn render_patch_preview(path: &Path, changes: &[EditChange]) -> Result<Option<String>> {
    let format = document_format(path)?;
    let original = fs::read_to_string(path).unwrap_or_default();
    let mut tree = load_tree(path, format);
    apply_changes(&mut tree, changes);
    let modified = serialize_tree(format, &tree)?;
    Ok(unified_diff(
        &path.display().to_string(),
        &original,
        &modified,
    ))
}

fn load_tree(path: &Path, format: DocumentFormat) -> Value {
    let Ok(contents) = fs::read_to_string(path) else {
        return empty_mapping();
    };
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(&contents).ok(),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(&contents).ok(),
    };
    match parsed {
        Some(Value::Null) | None => empty_mapping(),
        Some(value) => value,
    }
}

fn serialize_tree(format: DocumentFormat, tree: &Value) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            let mut buf = serde_json::to_string_pretty(tree).context("serialize json document")?;
            buf.push('\n');
            Ok(buf)
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(tree).context("serialize yaml document"),
    }
}

fn empty_mapping() -> Value {
    Value::Object(Map::new())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("patch.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp document {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace document {}", path.display()))?;
    Ok(())
}
