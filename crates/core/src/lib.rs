//! Path-addressed JSON tree editing for restprobe
//!
//! A dot-notation path (`addresses.0.city`) addresses a node in a
//! `serde_json::Value` tree. Three strategies walk the tree with different
//! policies:
//!
//! - [`tree::set`]: strict write; creates missing containers, fails with
//!   `TypeMismatch` on a node of the wrong kind
//! - [`tree::delete`]: tolerant remove; an unreachable path is a no-op
//! - [`tree::get`]: strict read for response extraction; object keys only
//!
//! [`apply_modifications`] and [`apply_removals`] run batches of writes and
//! removals in caller order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod error;
pub mod path;
pub mod tree;

pub use batch::{apply_modifications, apply_removals};
pub use error::{PathError, Result};
pub use path::{container_kind_for, ContainerKind, JsonPath, Segment};
