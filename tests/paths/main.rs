//! Path Editing Test Suite
//!
//! Tests organized by functionality:
//! - documented_cases: the worked examples for set/delete/get
//! - policies: how the three strategies diverge on the same document
//! - properties: proptest invariants over generated documents and paths

mod documented_cases;

use restprobe::tree;
use serde_json::Value;

/// Apply a write and hand back the document.
fn set(mut doc: Value, path: &str, value: Value) -> Value {
    tree::set(&mut doc, path, value).expect("set should succeed");
    doc
}

/// Apply a delete and hand back the document.
fn delete(mut doc: Value, path: &str) -> Value {
    tree::delete(&mut doc, path).expect("delete never fails on a non-null root");
    doc
}
