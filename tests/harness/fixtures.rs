//! The shipped fixture documents.

use crate::repo_dir;
use restprobe::prelude::*;

fn loader() -> FixtureLoader {
    FixtureLoader::new(repo_dir("fixtures"))
}

#[test]
fn shipped_fixtures_parse() {
    for name in ["create_user", "update_profile"] {
        let doc = loader().load(name).unwrap();
        assert!(doc.is_object(), "{} should be an object", name);
    }
}

#[test]
fn update_profile_edits() {
    let body = loader()
        .payload("update_profile")
        .unwrap()
        .modify([
            ("profile.preferences.theme", json!("dark")),
            ("tags.0", json!("beta")),
            ("profile.avatar.url", json!("https://cdn.example.com/a.png")),
        ])
        .unwrap()
        .remove(["profile.preferences.notifications", "profile.nonexistent"])
        .unwrap()
        .into_value();

    assert_eq!(
        body,
        json!({
            "profile": {
                "displayName": "ada",
                "preferences": {"theme": "dark"},
                "avatar": {"url": "https://cdn.example.com/a.png"}
            },
            "tags": ["beta"]
        })
    );
}

#[test]
fn failed_edit_aborts_batch() {
    let err = loader()
        .payload("create_user")
        .unwrap()
        .modify([("name.first", json!("Ada")), ("email", json!("x@y"))])
        .unwrap_err();
    match err {
        HarnessError::Path(PathError::TypeMismatch { path, found, .. }) => {
            assert_eq!(path, "name.first");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn read_back_with_strict_get() {
    let doc = loader().load("create_user").unwrap();
    let email: String = tree::get(&doc, "email").unwrap();
    assert_eq!(email, "ada@example.com");
    // arrays are not indexable through the strict reader
    assert!(tree::get::<String>(&doc, "addresses.0.city").unwrap_err().is_navigation());
}
