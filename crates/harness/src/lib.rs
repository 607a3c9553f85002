//! Test harness plumbing for restprobe
//!
//! Everything a REST API test needs around the JSON path core:
//!
//! - [`config`]: per-environment TOML configuration with env overrides and a
//!   load-once [`ConfigCell`]
//! - [`logging`]: console and file output through `tracing-subscriber`
//! - [`fixtures`]: JSON fixture loading and editable [`Payload`]s
//! - [`http`]: a blocking [`ApiClient`]
//! - [`response`] and [`assertions`]: field extraction and readable
//!   mismatch messages
//!
//! # Example
//!
//! ```ignore
//! use restprobe_harness::*;
//!
//! let config = HarnessConfig::from_env("config".as_ref())?;
//! logging::init(&config.logging)?;
//!
//! let client = ApiClient::from_config(&config);
//! let body = FixtureLoader::new(&config.fixtures_dir)
//!     .payload("create_user")?
//!     .with("addresses.0.city", "Oslo")?;
//!
//! client
//!     .send(&ApiRequest::post("/users").payload(body))?
//!     .assert_status(201)?
//!     .assert_field("addresses.city", "Oslo")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertions;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod logging;
pub mod response;

pub use assertions::AssertionError;
pub use config::{ConfigCell, HarnessConfig, HttpConfig, LogConfig};
pub use error::{HarnessError, Result};
pub use fixtures::{FixtureLoader, Payload};
pub use http::{ApiClient, ApiRequest, Method};
pub use response::ApiResponse;
