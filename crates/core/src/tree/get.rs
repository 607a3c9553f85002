//! Strict object-only read
//!
//! Used for response-field extraction. Every token is looked up as an object
//! key, digit-only tokens included; arrays are never indexed.

use super::type_name;
use crate::error::{PathError, Result};
use crate::path::JsonPath;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Borrow the node at `path`.
///
/// # Errors
///
/// - `InvalidPath` if `path` does not parse
/// - `Navigation` when a non-object is reached or a property is absent
pub fn get_value<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let path = JsonPath::parse(path)?;
    get_value_at(root, &path)
}

/// Borrow the node at an already parsed path.
pub fn get_value_at<'a>(root: &'a Value, path: &JsonPath) -> Result<&'a Value> {
    let mut current = root;
    for (position, token) in path.tokens().enumerate() {
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(PathError::Navigation {
                    path: path.to_string(),
                    position,
                    segment: token.to_string(),
                    reason: format!(
                        "expected object at '{}', found {}",
                        path.prefix(position),
                        type_name(other)
                    ),
                })
            }
        };
        current = map.get(token).ok_or_else(|| PathError::Navigation {
            path: path.to_string(),
            position,
            segment: token.to_string(),
            reason: "property not found".to_string(),
        })?;
    }
    Ok(current)
}

/// Read the node at `path` and convert it to `T`.
///
/// # Example
///
/// ```
/// use restprobe_core::tree;
/// use serde_json::json;
///
/// let body = json!({"user": {"id": 7, "name": "Ada"}});
/// let id: u64 = tree::get(&body, "user.id").unwrap();
/// assert_eq!(id, 7);
/// ```
///
/// # Errors
///
/// Everything [`get_value`] raises, plus `Extraction` when the node is null
/// or does not fit `T`.
pub fn get<T: DeserializeOwned>(root: &Value, path: &str) -> Result<T> {
    let path = JsonPath::parse(path)?;
    get_at(root, &path)
}

/// Typed read at an already parsed path.
pub fn get_at<T: DeserializeOwned>(root: &Value, path: &JsonPath) -> Result<T> {
    let node = get_value_at(root, path)?;
    if node.is_null() {
        return Err(PathError::Extraction {
            path: path.to_string(),
            reason: "value is null".to_string(),
        });
    }
    T::deserialize(node).map_err(|e| PathError::Extraction {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
