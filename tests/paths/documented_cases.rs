//! Worked examples for each strategy.

use crate::{delete, set};
use restprobe::{tree, PathError};
use serde_json::json;

#[test]
fn set_creates_nested_objects() {
    assert_eq!(set(json!({}), "a.b.c", json!(1)), json!({"a": {"b": {"c": 1}}}));
}

#[test]
fn set_creates_array_when_next_segment_is_numeric() {
    assert_eq!(
        set(json!({}), "a.0.city", json!("X")),
        json!({"a": [{"city": "X"}]})
    );
}

#[test]
fn set_grows_array_with_nulls() {
    assert_eq!(
        set(json!({"arr": [1]}), "arr.3", json!(9)),
        json!({"arr": [1, null, null, 9]})
    );
}

#[test]
fn delete_missing_path_is_noop() {
    assert_eq!(delete(json!({"a": 1}), "b.c"), json!({"a": 1}));
}

#[test]
fn delete_present_key() {
    assert_eq!(delete(json!({"a": 1, "b": 2}), "a"), json!({"b": 2}));
}

#[test]
fn delete_array_index() {
    assert_eq!(delete(json!({"arr": [1, 2, 3]}), "arr.1"), json!({"arr": [1, 3]}));
}

#[test]
fn set_key_against_array_is_type_mismatch() {
    let mut doc = json!({"a": [1, 2]});
    let err = tree::set(&mut doc, "a.b", 1).unwrap_err();
    assert!(matches!(err, PathError::TypeMismatch { .. }));
}

#[test]
fn get_through_array_is_navigation_error() {
    let doc = json!({"a": [1, 2]});
    let err = tree::get_value(&doc, "a.0").unwrap_err();
    assert!(matches!(err, PathError::Navigation { .. }));
}

#[test]
fn set_twice_equals_set_once() {
    let once = set(json!({"arr": [1]}), "arr.2.name", json!("x"));
    let twice = set(once.clone(), "arr.2.name", json!("x"));
    assert_eq!(once, twice);
}

#[test]
fn fixture_style_edit_cycle() {
    let doc = json!({
        "name": "Ada",
        "addresses": [{"city": "London"}],
        "metadata": {"lastLogin": "2024-01-15", "source": "fixture"}
    });
    let doc = restprobe::apply_modifications(
        doc,
        [
            ("addresses.0.city", json!("Oslo")),
            ("addresses.1.city", json!("Bergen")),
            ("metadata.source", json!("test")),
        ],
    )
    .unwrap();
    let doc = restprobe::apply_removals(doc, ["metadata.lastLogin", "metadata.missing"]).unwrap();

    assert_eq!(
        doc,
        json!({
            "name": "Ada",
            "addresses": [{"city": "Oslo"}, {"city": "Bergen"}],
            "metadata": {"source": "test"}
        })
    );
    let source: String = tree::get(&doc, "metadata.source").unwrap();
    assert_eq!(source, "test");
}
