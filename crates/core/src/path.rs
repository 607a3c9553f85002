//! Dot-notation paths
//!
//! A path such as `addresses.0.city` is split on `.` into segments. A token
//! made only of ASCII digits is an array index; anything else is an object
//! key.
//!
//! There is no escaping. A key that contains `.` cannot be addressed, and a
//! digit-only key is read as an index by `set` and `delete`. The strict
//! reader treats every token as a key, so `get` can still reach it.

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

/// One unit of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object property name
    Key(String),
    /// Array position
    Index(usize),
}

impl Segment {
    /// Classify a single token.
    ///
    /// A token is an index iff it is non-empty, all ASCII digits, and fits
    /// in `usize`.
    pub fn classify(token: &str) -> Segment {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = token.parse::<usize>() {
                return Segment::Index(index);
            }
        }
        Segment::Key(token.to_string())
    }

    /// Check if this segment addresses an array element.
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Kind of container a segment navigates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// JSON object
    Object,
    /// JSON array
    Array,
}

impl ContainerKind {
    /// Container kind the given segment must be applied to.
    pub fn required_by(segment: &Segment) -> ContainerKind {
        match segment {
            Segment::Key(_) => ContainerKind::Object,
            Segment::Index(_) => ContainerKind::Array,
        }
    }

    /// A fresh, empty container of this kind.
    pub fn empty(self) -> serde_json::Value {
        match self {
            ContainerKind::Object => serde_json::Value::Object(serde_json::Map::new()),
            ContainerKind::Array => serde_json::Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Object => f.write_str("object"),
            ContainerKind::Array => f.write_str("array"),
        }
    }
}

/// Decide which container to create for a missing intermediate node.
///
/// Looks ahead at the segment that will be applied to the new node: an index
/// needs an array, a key (or nothing at all) gets an object.
pub fn container_kind_for(next: Option<&Segment>) -> ContainerKind {
    match next {
        Some(Segment::Index(_)) => ContainerKind::Array,
        _ => ContainerKind::Object,
    }
}

/// A parsed dot-notation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    raw: String,
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parse a dot-notation path.
    ///
    /// # Errors
    ///
    /// `InvalidPath` for an empty path or any empty segment (`a..b`, `.a`,
    /// `a.`).
    pub fn parse(path: &str) -> Result<JsonPath> {
        if path.is_empty() {
            return Err(PathError::InvalidPath {
                path: String::new(),
                reason: "path is empty".to_string(),
            });
        }

        let mut segments = Vec::new();
        for (position, token) in path.split('.').enumerate() {
            if token.is_empty() {
                return Err(PathError::InvalidPath {
                    path: path.to_string(),
                    reason: format!("empty segment at position {}", position),
                });
            }
            segments.push(Segment::classify(token));
        }

        Ok(JsonPath {
            raw: path.to_string(),
            segments,
        })
    }

    /// The path exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Raw tokens in order, before index classification.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// Number of segments (always at least one).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment the operation is applied to.
    pub fn last(&self) -> &Segment {
        // parse() rejects empty paths, so there is always a last segment
        &self.segments[self.segments.len() - 1]
    }

    /// Dotted text of the first `count` segments.
    pub fn prefix(&self, count: usize) -> String {
        self.tokens().take(count).collect::<Vec<_>>().join(".")
    }
}

impl FromStr for JsonPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        JsonPath::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
