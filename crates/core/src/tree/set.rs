//! Strict write with auto-vivification
//!
//! Missing intermediate nodes are created; the container kind comes from
//! [`container_kind_for`] applied to the following segment. An existing node
//! of the wrong kind is never promoted or replaced: the write fails with
//! `TypeMismatch`.
//!
//! One extension to that rule: a `null` met on the way counts as absent and
//! is replaced by a fresh container, so `{"meta": null}` accepts
//! `meta.tags.0`. A `null` at the terminal position is simply overwritten.
//!
//! A failed [`set`] leaves the document exactly as it was. Growing an array
//! past what can be allocated is reported as `InvalidPath` instead of
//! aborting.

use super::type_name;
use crate::error::{PathError, Result};
use crate::path::{container_kind_for, ContainerKind, JsonPath, Segment};
use serde_json::{Map, Value};
use tracing::debug;

/// Write `value` at `path`, creating intermediate containers as needed.
///
/// Scalars are wrapped through `Into<Value>`; a `Value` passes through as is.
///
/// # Example
///
/// ```
/// use restprobe_core::tree;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// tree::set(&mut doc, "addresses.0.city", "Oslo").unwrap();
/// assert_eq!(doc, json!({"addresses": [{"city": "Oslo"}]}));
/// ```
pub fn set(root: &mut Value, path: &str, value: impl Into<Value>) -> Result<()> {
    let path = JsonPath::parse(path)?;
    set_at(root, &path, value.into())
}

/// Owned variant of [`set`] that hands the mutated root back.
///
/// On error the root is dropped, so no staging copy is made.
pub fn set_value(mut root: Value, path: &str, value: impl Into<Value>) -> Result<Value> {
    let path = JsonPath::parse(path)?;
    write(&mut root, &path, value.into())?;
    Ok(root)
}

/// Write `value` at an already parsed path.
///
/// The write goes to a copy of `root` that replaces it only on success.
pub fn set_at(root: &mut Value, path: &JsonPath, value: Value) -> Result<()> {
    let mut staged = root.clone();
    write(&mut staged, path, value)?;
    *root = staged;
    Ok(())
}

/// Write in place; a failure may leave partial changes behind.
fn write(root: &mut Value, path: &JsonPath, value: Value) -> Result<()> {
    debug!(path = %path, "json set");

    let segments = path.segments();
    let terminal = segments.len() - 1;

    let mut current = root;
    for (position, segment) in segments[..terminal].iter().enumerate() {
        let next = segments.get(position + 1);
        current = descend_or_create(current, path, position, segment, next)?;
    }

    assign(current, path, terminal, &segments[terminal], value)
}

/// Step into the child named by `segment`, creating it when absent.
///
/// A null child counts as absent and is replaced by a fresh container.
fn descend_or_create<'a>(
    node: &'a mut Value,
    path: &JsonPath,
    position: usize,
    segment: &Segment,
    next: Option<&Segment>,
) -> Result<&'a mut Value> {
    let child = match segment {
        Segment::Key(key) => {
            let map = match node {
                Value::Object(map) => map,
                other => return Err(mismatch(path, position, segment, other)),
            };
            map.entry(key.clone()).or_insert(Value::Null)
        }
        Segment::Index(index) => {
            let items = match node {
                Value::Array(items) => items,
                other => return Err(mismatch(path, position, segment, other)),
            };
            let len = grown_len(items, path, position, *index)?;
            if items.len() < len {
                items.resize_with(len, || Value::Object(Map::new()));
            }
            &mut items[*index]
        }
    };

    if child.is_null() {
        *child = container_kind_for(next).empty();
    }
    Ok(child)
}

/// Apply the terminal segment to the parent container.
fn assign(
    parent: &mut Value,
    path: &JsonPath,
    position: usize,
    segment: &Segment,
    value: Value,
) -> Result<()> {
    match segment {
        Segment::Key(key) => match parent {
            Value::Object(map) => {
                map.insert(key.clone(), value);
                Ok(())
            }
            other => Err(mismatch(path, position, segment, other)),
        },
        Segment::Index(index) => match parent {
            Value::Array(items) => {
                let len = grown_len(items, path, position, *index)?;
                if items.len() < len {
                    items.resize(len, Value::Null);
                }
                items[*index] = value;
                Ok(())
            }
            other => Err(mismatch(path, position, segment, other)),
        },
    }
}

/// Length `items` needs for `index`, with room already reserved.
fn grown_len(
    items: &mut Vec<Value>,
    path: &JsonPath,
    position: usize,
    index: usize,
) -> Result<usize> {
    let out_of_range = |detail: &str| PathError::InvalidPath {
        path: path.to_string(),
        reason: format!("index {} at position {} out of range: {}", index, position, detail),
    };

    let len = index
        .checked_add(1)
        .ok_or_else(|| out_of_range("length overflows usize"))?;
    if len > items.len() {
        items
            .try_reserve(len - items.len())
            .map_err(|e| out_of_range(&e.to_string()))?;
    }
    Ok(len)
}

fn mismatch(path: &JsonPath, position: usize, segment: &Segment, found: &Value) -> PathError {
    PathError::TypeMismatch {
        path: path.to_string(),
        position,
        segment: path
            .tokens()
            .nth(position)
            .map(str::to_string)
            .unwrap_or_else(|| segment.to_string()),
        traversed: path.prefix(position),
        expected: ContainerKind::required_by(segment),
        found: type_name(found),
    }
}
