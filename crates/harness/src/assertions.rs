//! Response assertions with readable mismatch messages.

use restprobe_core::{tree, PathError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A failed expectation about a response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    /// Status code differs
    #[error("expected status {expected} from {url}, got {actual}; body: {body}")]
    Status {
        /// Required status
        expected: u16,
        /// Received status
        actual: u16,
        /// Request URL
        url: String,
        /// Response body, truncated
        body: String,
    },

    /// Field holds a different value
    #[error("field '{path}': expected {expected}, got {actual}")]
    FieldMismatch {
        /// Dotted field path
        path: String,
        /// Expected JSON value
        expected: Value,
        /// Actual JSON value
        actual: Value,
    },

    /// Field could not be reached
    #[error("field '{path}' is missing: {reason}")]
    FieldMissing {
        /// Dotted field path
        path: String,
        /// Navigation failure
        reason: String,
    },

    /// Field exists but should not
    #[error("field '{path}' should be absent, found {actual}")]
    FieldPresent {
        /// Dotted field path
        path: String,
        /// Value found
        actual: Value,
    },

    /// Assertion path does not parse
    #[error("invalid field path '{path}': {reason}")]
    InvalidPath {
        /// Path as written
        path: String,
        /// Parse failure
        reason: String,
    },

    /// Body is not JSON
    #[error("response body is not JSON: {0}")]
    NotJson(String),

    /// Expected value could not be turned into JSON
    #[error("expected value for '{path}' is not representable as JSON: {reason}")]
    InvalidExpected {
        /// Dotted field path
        path: String,
        /// Serialization failure
        reason: String,
    },
}

const BODY_PREVIEW: usize = 512;

/// Require `actual == expected`.
pub fn assert_status(
    url: &str,
    body: &str,
    expected: u16,
    actual: u16,
) -> Result<(), AssertionError> {
    if actual == expected {
        return Ok(());
    }
    let mut preview: String = body.chars().take(BODY_PREVIEW).collect();
    if body.chars().count() > BODY_PREVIEW {
        preview.push_str("...");
    }
    Err(AssertionError::Status {
        expected,
        actual,
        url: url.to_string(),
        body: preview,
    })
}

/// Require the field at `path` to equal `expected`.
///
/// Numbers compare by value, so `1` matches `1.0`.
pub fn assert_field_eq<T: Serialize>(
    body: &Value,
    path: &str,
    expected: T,
) -> Result<(), AssertionError> {
    let expected = serde_json::to_value(expected).map_err(|e| AssertionError::InvalidExpected {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let actual = field(body, path)?;

    if values_match(actual, &expected) {
        Ok(())
    } else {
        Err(AssertionError::FieldMismatch {
            path: path.to_string(),
            expected,
            actual: actual.clone(),
        })
    }
}

/// Require the field at `path` to exist (null counts as present).
pub fn assert_field_present(body: &Value, path: &str) -> Result<(), AssertionError> {
    field(body, path).map(|_| ())
}

/// Require the field at `path` to be unreachable.
///
/// A malformed path fails rather than counting as absent.
pub fn assert_field_absent(body: &Value, path: &str) -> Result<(), AssertionError> {
    match tree::get_value(body, path) {
        Ok(actual) => Err(AssertionError::FieldPresent {
            path: path.to_string(),
            actual: actual.clone(),
        }),
        Err(PathError::Navigation { .. }) => Ok(()),
        Err(e) => Err(field_error(path, e)),
    }
}

fn field<'a>(body: &'a Value, path: &str) -> Result<&'a Value, AssertionError> {
    tree::get_value(body, path).map_err(|e| field_error(path, e))
}

fn field_error(path: &str, err: PathError) -> AssertionError {
    match err {
        PathError::InvalidPath { reason, .. } => AssertionError::InvalidPath {
            path: path.to_string(),
            reason,
        },
        other => AssertionError::FieldMissing {
            path: path.to_string(),
            reason: other.to_string(),
        },
    }
}

fn values_match(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) if !(a.is_nan() || b.is_nan()) => a == b,
            _ => a == b,
        },
        _ => actual == expected,
    }
}
