//! Fixture documents and request payload templates
//!
//! A fixture is a JSON file under the fixtures directory. Tests load one as a
//! template, then edit it with dot-notation paths before sending it.

use crate::error::{HarnessError, Result};
use restprobe_core::{apply_modifications, apply_removals, tree};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads fixture documents from a directory.
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    dir: PathBuf,
}

impl FixtureLoader {
    /// Loader rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Fixture directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing fixture `name`; the `.json` suffix is optional.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.ends_with(".json") {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{}.json", name))
        }
    }

    /// Load and parse fixture `name`.
    pub fn load(&self, name: &str) -> Result<Value> {
        let path = self.path_for(name);
        debug!(fixture = %path.display(), "loading fixture");

        let text = std::fs::read_to_string(&path).map_err(|e| HarnessError::Fixture {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| HarnessError::Fixture {
            path,
            reason: e.to_string(),
        })
    }

    /// Load fixture `name` and deserialize it into `T`.
    pub fn load_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.load(name)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Load fixture `name` as an editable payload.
    pub fn payload(&self, name: &str) -> Result<Payload> {
        Ok(Payload::new(self.load(name)?))
    }
}

/// An editable JSON request body.
///
/// ```ignore
/// let body = loader
///     .payload("create_user")?
///     .with("name", "Grace")?
///     .with("addresses.0.city", "Oslo")?
///     .without("metadata.lastLogin")?
///     .into_value();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    value: Value,
}

impl Payload {
    /// Wrap an existing document.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Set `path` to `value`.
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Result<Self> {
        self.value = tree::set_value(self.value, path, value)?;
        Ok(self)
    }

    /// Remove `path` if present.
    pub fn without(mut self, path: &str) -> Result<Self> {
        tree::delete(&mut self.value, path)?;
        Ok(self)
    }

    /// Apply a batch of writes in order.
    pub fn modify<I, K, V>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        Ok(Self::new(apply_modifications(self.value, entries)?))
    }

    /// Apply a batch of removals in order.
    pub fn remove<I, P>(self, paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Ok(Self::new(apply_removals(self.value, paths)?))
    }

    /// Borrow the document.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the document.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::new(value)
    }
}
