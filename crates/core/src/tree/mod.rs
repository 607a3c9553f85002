//! Tree strategies
//!
//! Three traversal policies over a `serde_json::Value` tree. They share only
//! the parser; each walks the tree its own way:
//!
//! | Strategy | Missing / wrong-kind node | Index segments |
//! |----------|---------------------------|----------------|
//! | [`set`] | create, or `TypeMismatch` | yes, grows arrays |
//! | [`delete`] | silent no-op | yes |
//! | [`get`] | `Navigation` error | no, every token is a key |

mod delete;
mod get;
mod set;

pub use delete::{delete, delete_at};
pub use get::{get, get_at, get_value, get_value_at};
pub use set::{set, set_at, set_value};

use serde_json::Value;

/// JSON type name used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
