//! Error types for the harness layers.

use crate::assertions::AssertionError;
use restprobe_core::PathError;
use std::path::PathBuf;
use thiserror::Error;

/// All harness errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration file unreadable or invalid
    #[error("config error: {0}")]
    Config(String),

    /// Fixture file missing or not valid JSON
    #[error("fixture '{}': {reason}", path.display())]
    Fixture {
        /// Fixture file location
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Path operation on a JSON tree failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network failure, timeout, or malformed URL
    #[error("transport error: {0}")]
    Transport(String),

    /// Response status was not the one required
    #[error("unexpected HTTP status {status} from {url}")]
    Http {
        /// Status code received
        status: u16,
        /// Request URL
        url: String,
    },

    /// An assertion on a response failed
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// Logging subscriber could not be installed
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

impl HarnessError {
    /// Check if this error came from the JSON path layer.
    pub fn is_path(&self) -> bool {
        matches!(self, HarnessError::Path(_))
    }

    /// Check if this is a failed assertion.
    pub fn is_assertion(&self) -> bool {
        matches!(self, HarnessError::Assertion(_))
    }

    /// Check if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, HarnessError::Transport(_))
    }
}

impl From<toml::de::Error> for HarnessError {
    fn from(e: toml::de::Error) -> Self {
        HarnessError::Config(e.to_string())
    }
}
