//! Blocking HTTP client
//!
//! A thin wrapper over a `ureq::Agent` that joins request paths to the
//! configured base URL, adds default headers and the bearer token, and
//! serializes JSON bodies.

use crate::config::{HarnessConfig, HttpConfig};
use crate::error::{HarnessError, Result};
use crate::fixtures::Payload;
use crate::response::ApiResponse;
use serde_json::Value;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
}

impl Method {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to send through [`ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    bearer: Option<String>,
    body: Option<Value>,
}

impl ApiRequest {
    /// Request for `path`, relative to the base URL or absolute.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            bearer: None,
            body: None,
        }
    }

    /// GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a header; it wins over a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use `token` instead of the configured bearer token.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach an edited fixture as the JSON body.
    pub fn payload(self, payload: Payload) -> Self {
        self.json(payload.into_value())
    }

    /// Method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Path as given.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// HTTP client bound to one base URL.
#[derive(Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    config: HttpConfig,
}

impl ApiClient {
    /// Client for the given HTTP settings.
    pub fn new(config: HttpConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout()).build();
        Self { agent, config }
    }

    /// Client for a full harness configuration.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.http.clone())
    }

    /// HTTP settings in use.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Absolute URL for `path`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Send `request` and read the whole response.
    ///
    /// Any HTTP status yields `Ok`; only transport failures are errors.
    pub fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        let mut call = self.agent.request(request.method.as_str(), &url);

        for (name, value) in &self.config.headers {
            call = call.set(name, value);
        }
        if let Some(token) = request.bearer.as_ref().or(self.config.auth_token.as_ref()) {
            call = call.set("Authorization", &format!("Bearer {}", token));
        }
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }
        for (name, value) in &request.query {
            call = call.query(name, value);
        }

        let started = Instant::now();
        let result = match &request.body {
            Some(body) => {
                let text = serde_json::to_string(body)?;
                debug!(method = %request.method, url = %url, body = %text, "sending request");
                call.set("Content-Type", "application/json").send_string(&text)
            }
            None => {
                debug!(method = %request.method, url = %url, "sending request");
                call.call()
            }
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(HarnessError::Transport(format!(
                    "{} {}: {}",
                    request.method, url, transport
                )));
            }
        };

        let status = response.status();
        let headers = response
            .headers_names()
            .into_iter()
            .filter_map(|name| {
                let value = response.header(&name)?.to_string();
                Some((name, value))
            })
            .collect();
        let final_url = response.get_url().to_string();
        let body = response.into_string()?;

        info!(
            method = %request.method,
            url = %final_url,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request complete"
        );

        Ok(ApiResponse::new(status, final_url, headers, body))
    }

    /// GET `path`.
    pub fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(&ApiRequest::get(path))
    }

    /// POST a JSON body to `path`.
    pub fn post(&self, path: &str, body: impl Into<Value>) -> Result<ApiResponse> {
        self.send(&ApiRequest::post(path).json(body))
    }

    /// PUT a JSON body to `path`.
    pub fn put(&self, path: &str, body: impl Into<Value>) -> Result<ApiResponse> {
        self.send(&ApiRequest::put(path).json(body))
    }

    /// PATCH a JSON body to `path`.
    pub fn patch(&self, path: &str, body: impl Into<Value>) -> Result<ApiResponse> {
        self.send(&ApiRequest::patch(path).json(body))
    }

    /// DELETE `path`.
    pub fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(&ApiRequest::delete(path))
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}
