//! # restprobe
//!
//! REST API test harness built around path-addressed JSON editing.
//!
//! Request bodies start life as JSON fixtures, get edited with dot-notation
//! paths, go out through a blocking HTTP client, and responses are checked
//! field by field with readable mismatch messages.
//!
//! ## Quick Start
//!
//! ```ignore
//! use restprobe::prelude::*;
//!
//! let config = HarnessConfig::from_env("config".as_ref())?;
//! let client = ApiClient::from_config(&config);
//! let fixtures = FixtureLoader::new(&config.fixtures_dir);
//!
//! let body = fixtures
//!     .payload("create_user")?
//!     .with("addresses.0.city", "Oslo")?
//!     .without("metadata.lastLogin")?;
//!
//! let resp = client.send(&ApiRequest::post("/users").payload(body))?;
//! resp.assert_status(201)?.assert_field("name", "Ada")?;
//! ```
//!
//! ## Paths
//!
//! `a.b.0.c` addresses `doc["a"]["b"][0]["c"]`. Writes create missing
//! containers, deletes ignore missing paths, and reads (used for response
//! extraction) only follow object keys. See [`tree`].

#![warn(missing_docs)]

pub mod prelude;

pub use restprobe_core::{
    apply_modifications, apply_removals, container_kind_for, tree, ContainerKind, JsonPath,
    PathError, Segment,
};
pub use restprobe_harness::{
    assertions, config, fixtures, http, logging, response, ApiClient, ApiRequest, ApiResponse,
    AssertionError, ConfigCell, FixtureLoader, HarnessConfig, HarnessError, HttpConfig, LogConfig,
    Method, Payload, Result,
};
