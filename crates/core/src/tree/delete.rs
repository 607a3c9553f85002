//! Tolerant removal
//!
//! An unreachable path means there is nothing to delete. Only a null
//! document root is reported as an error.

use crate::error::{PathError, Result};
use crate::path::{JsonPath, Segment};
use serde_json::Value;
use tracing::debug;

/// Remove the value at `path`.
///
/// Returns `true` if something was removed. Removing an array element shifts
/// the following elements down.
///
/// # Errors
///
/// - `InvalidPath` if `path` does not parse
/// - `NullRoot` if `root` is null
pub fn delete(root: &mut Value, path: &str) -> Result<bool> {
    let path = JsonPath::parse(path)?;
    delete_at(root, &path)
}

/// Remove the value at an already parsed path.
pub fn delete_at(root: &mut Value, path: &JsonPath) -> Result<bool> {
    if root.is_null() {
        return Err(PathError::NullRoot {
            path: path.to_string(),
        });
    }

    let segments = path.segments();
    let terminal = segments.len() - 1;

    let mut current = root;
    for (position, segment) in segments[..terminal].iter().enumerate() {
        let child = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get_mut(key),
            (Segment::Index(index), Value::Array(items)) => items.get_mut(*index),
            _ => None,
        };
        match child {
            Some(child) => current = child,
            None => {
                debug!(path = %path, position, "json delete: path not reachable");
                return Ok(false);
            }
        }
    }

    let removed = match (&segments[terminal], current) {
        (Segment::Key(key), Value::Object(map)) => map.shift_remove(key).is_some(),
        (Segment::Index(index), Value::Array(items)) if *index < items.len() => {
            items.remove(*index);
            true
        }
        _ => false,
    };

    debug!(path = %path, removed, "json delete");
    Ok(removed)
}
