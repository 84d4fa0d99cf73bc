//! Dotted-path mutation of in-memory document trees.
//!
//! Trees are [`serde_json::Value`], a tagged variant over mapping, sequence,
//! string, number, boolean, and null, so traversal and "can I descend into
//! this?" checks are exhaustive. JSON and YAML documents share these
//! semantics; only the parse/serialize backend differs (see `io::document`).

use serde_json::{Map, Value};

use crate::core::types::{EditChange, EditOp};

/// Apply an ordered change list to `root`.
///
/// `Set` creates empty mapping nodes at missing intermediate segments and
/// assigns at the final segment only when its parent is a mapping; otherwise
/// the change is dropped, not errored. `Delete` removes the final key when
/// present and no-ops on missing or non-mapping intermediates; it never
/// creates nodes. A key with empty segments drops the change.
pub fn apply_changes(root: &mut Value, changes: &[EditChange]) {
    for change in changes {
        apply_change(root, change);
    }
}

fn apply_change(root: &mut Value, change: &EditChange) {
    let segments: Vec<&str> = change.key.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return;
    }
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let Value::Object(map) = node else {
            return;
        };
        node = match change.op {
            EditOp::Set => map
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            EditOp::Delete => match map.get_mut(*segment) {
                Some(child) => child,
                None => return,
            },
        };
    }

    let Value::Object(map) = node else {
        return;
    };
    match change.op {
        EditOp::Set => {
            map.insert(
                (*last).to_string(),
                change.value.clone().unwrap_or(Value::Null),
            );
        }
        EditOp::Delete => {
            map.remove(*last);
        }
    }
}
