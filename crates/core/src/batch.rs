//! Batch application of modifications and removals
//!
//! Entries are applied one at a time in caller order. A failing write aborts
//! the batch; a removal of a missing path never does.

use crate::error::Result;
use crate::tree;
use serde_json::Value;
use tracing::debug;

/// Apply every `(path, value)` write to `root` in order.
///
/// # Example
///
/// ```
/// use restprobe_core::apply_modifications;
/// use serde_json::json;
///
/// let doc = apply_modifications(
///     json!({"name": "a"}),
///     [("name", json!("b")), ("tags.0", json!("new"))],
/// )
/// .unwrap();
/// assert_eq!(doc, json!({"name": "b", "tags": ["new"]}));
/// ```
pub fn apply_modifications<I, K, V>(mut root: Value, entries: I) -> Result<Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut applied = 0usize;
    for (path, value) in entries {
        root = tree::set_value(root, path.as_ref(), value)?;
        applied += 1;
    }
    debug!(applied, "applied modifications");
    Ok(root)
}

/// Delete every path in `paths` from `root` in order.
pub fn apply_removals<I, P>(mut root: Value, paths: I) -> Result<Value>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut removed = 0usize;
    for path in paths {
        if tree::delete(&mut root, path.as_ref())? {
            removed += 1;
        }
    }
    debug!(removed, "applied removals");
    Ok(root)
}
