//! Error types for path-addressed JSON operations
//!
//! Every variant carries the full dotted path so a failure can be read
//! without a separate trace.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | InvalidPath | Parser (empty path, empty segment); `set` on an index out of range |
//! | TypeMismatch | `set` only |
//! | Navigation | `get` only |
//! | Extraction | `get::<T>` only |
//! | NullRoot | `delete` on a null document |

use crate::path::ContainerKind;
use thiserror::Error;

/// Errors raised by the path parser and the tree strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path string is malformed, or names an index no array can reach
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path text
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// A write reached a node that cannot hold the segment
    #[error(
        "type mismatch in '{path}' at segment {position} ('{segment}'): \
         expected {expected} at '{traversed}', found {found}"
    )]
    TypeMismatch {
        /// Full dotted path
        path: String,
        /// Zero-based segment position
        position: usize,
        /// Segment text
        segment: String,
        /// Path consumed before this segment
        traversed: String,
        /// Container kind the segment demands
        expected: ContainerKind,
        /// JSON type actually found
        found: &'static str,
    },

    /// A strict read could not follow the path
    #[error("cannot navigate '{path}' at segment {position} ('{segment}'): {reason}")]
    Navigation {
        /// Full dotted path
        path: String,
        /// Zero-based segment position
        position: usize,
        /// Segment text
        segment: String,
        /// Why navigation stopped
        reason: String,
    },

    /// The terminal value is missing or cannot take the requested shape
    #[error("cannot extract value at '{path}': {reason}")]
    Extraction {
        /// Full dotted path
        path: String,
        /// Conversion failure description
        reason: String,
    },

    /// Delete was handed a null document
    #[error("cannot delete '{path}': document root is null")]
    NullRoot {
        /// Full dotted path
        path: String,
    },
}

impl PathError {
    /// The full dotted path the failing operation was given.
    pub fn path(&self) -> &str {
        match self {
            PathError::InvalidPath { path, .. }
            | PathError::TypeMismatch { path, .. }
            | PathError::Navigation { path, .. }
            | PathError::Extraction { path, .. }
            | PathError::NullRoot { path } => path,
        }
    }

    /// Zero-based position of the faulting segment, if one was reached.
    pub fn position(&self) -> Option<usize> {
        match self {
            PathError::TypeMismatch { position, .. } | PathError::Navigation { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// Check if this is a parse failure.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, PathError::InvalidPath { .. })
    }

    /// Check if this is a write-side container mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, PathError::TypeMismatch { .. })
    }

    /// Check if this is a read-side navigation failure.
    pub fn is_navigation(&self) -> bool {
        matches!(self, PathError::Navigation { .. })
    }

    /// Check if this is a terminal conversion failure.
    pub fn is_extraction(&self) -> bool {
        matches!(self, PathError::Extraction { .. })
    }
}

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
