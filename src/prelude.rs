//! Convenient imports for test code.
//!
//! ```ignore
//! use restprobe::prelude::*;
//! ```

pub use crate::{
    apply_modifications, apply_removals, tree, ApiClient, ApiRequest, ApiResponse, ConfigCell,
    FixtureLoader, HarnessConfig, HarnessError, JsonPath, PathError, Payload, Result,
};
pub use serde_json::{json, Value};
