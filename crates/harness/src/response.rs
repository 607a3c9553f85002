//! HTTP responses as seen by tests.

use crate::assertions::{self, AssertionError};
use crate::error::{HarnessError, Result};
use restprobe_core::tree;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A fully read HTTP response.
///
/// 4xx and 5xx statuses are ordinary responses; use
/// [`error_for_status`](ApiResponse::error_for_status) or
/// [`assert_status`](ApiResponse::assert_status) to reject them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    url: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl ApiResponse {
    /// Build a response from its parts.
    pub fn new(
        status: u16,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status,
            url: url.into(),
            headers,
            body: body.into(),
        }
    }

    /// Status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Final request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All headers in received order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Body deserialized into `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Extract the field at `path` from the JSON body.
    pub fn field<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.json()?;
        Ok(tree::get(&body, path)?)
    }

    /// Clone of the node at `path` in the JSON body.
    pub fn field_value(&self, path: &str) -> Result<Value> {
        let body = self.json()?;
        Ok(tree::get_value(&body, path)?.clone())
    }

    /// Turn a non-2xx response into `HarnessError::Http`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HarnessError::Http {
                status: self.status,
                url: self.url,
            })
        }
    }

    /// Require status `expected`.
    pub fn assert_status(&self, expected: u16) -> Result<&Self> {
        assertions::assert_status(&self.url, &self.body, expected, self.status)?;
        Ok(self)
    }

    /// Require the field at `path` to equal `expected`.
    pub fn assert_field<T: Serialize>(&self, path: &str, expected: T) -> Result<&Self> {
        let body = self.body_for_assertion()?;
        assertions::assert_field_eq(&body, path, expected)?;
        Ok(self)
    }

    /// Require the field at `path` to exist.
    pub fn assert_field_present(&self, path: &str) -> Result<&Self> {
        let body = self.body_for_assertion()?;
        assertions::assert_field_present(&body, path)?;
        Ok(self)
    }

    /// Require the field at `path` to be absent.
    pub fn assert_field_absent(&self, path: &str) -> Result<&Self> {
        let body = self.body_for_assertion()?;
        assertions::assert_field_absent(&body, path)?;
        Ok(self)
    }

    fn body_for_assertion(&self) -> std::result::Result<Value, AssertionError> {
        serde_json::from_str(&self.body).map_err(|e| AssertionError::NotJson(e.to_string()))
    }
}
