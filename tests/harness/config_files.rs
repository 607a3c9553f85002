//! The shipped config directory and load-once sharing.

use crate::repo_dir;
use restprobe::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn dev_config_loads() {
    let config = HarnessConfig::load(&repo_dir("config"), "dev").unwrap();
    assert_eq!(config.environment, "dev");
    assert_eq!(config.http.base_url, "http://localhost:8080/api");
    assert_eq!(config.http.timeout_secs, 10);
    assert_eq!(
        config.http.headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(config.fixtures_dir.to_str(), Some("fixtures"));
}

#[test]
fn unknown_environment_falls_back_to_defaults() {
    let config = HarnessConfig::load(&repo_dir("config"), "nowhere").unwrap();
    assert_eq!(config.environment, "nowhere");
    assert_eq!(config.http, restprobe::HttpConfig::default());
}

#[test]
fn shared_cell_hands_out_one_config() {
    let dir = repo_dir("config");
    let cell = Arc::new(ConfigCell::new(move || HarnessConfig::load(&dir, "dev")));

    let configs: Vec<_> = (0..4)
        .map(|_| {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.get_or_load().unwrap())
        })
        .map(|handle| handle.join().unwrap())
        .collect();

    for config in &configs[1..] {
        assert!(Arc::ptr_eq(&configs[0], config));
    }
}
