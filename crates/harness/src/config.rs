//! Harness configuration
//!
//! Configuration is an explicit object handed to the client and fixture
//! loader. Values come from `config/<environment>.toml`, then environment
//! variables override individual fields:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RESTPROBE_ENV` | which file to load (default `dev`) |
//! | `RESTPROBE_BASE_URL` | `http.base_url` |
//! | `RESTPROBE_TIMEOUT_SECS` | `http.timeout_secs` |
//! | `RESTPROBE_AUTH_TOKEN` | `http.auth_token` |
//! | `RESTPROBE_LOG_LEVEL` | `logging.level` |
//! | `RESTPROBE_LOG_FILE` | `logging.file` |
//! | `RESTPROBE_FIXTURES_DIR` | `fixtures_dir` |
//!
//! [`ConfigCell`] gives tests a shared, load-once handle.

use crate::error::{HarnessError, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable selecting the config file.
pub const ENV_VAR: &str = "RESTPROBE_ENV";

/// Environment used when `RESTPROBE_ENV` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL every request path is joined to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Bearer token sent as `Authorization` when set
    pub auth_token: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            headers: BTreeMap::new(),
            auth_token: None,
        }
    }
}

impl HttpConfig {
    /// Timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `restprobe=debug`
    pub level: String,
    /// Optional log file; console output is always on
    pub file: Option<PathBuf>,
    /// Colour console output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            ansi: true,
        }
    }
}

/// Complete harness configuration.
///
/// ```ignore
/// use restprobe_harness::HarnessConfig;
///
/// let config = HarnessConfig::default()
///     .with_base_url("http://localhost:3000")
///     .with_header("X-Tenant", "acme");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Environment name the config was loaded for
    pub environment: String,
    /// HTTP client settings
    pub http: HttpConfig,
    /// Logging settings
    pub logging: LogConfig,
    /// Directory fixture documents are read from
    pub fixtures_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            http: HttpConfig::default(),
            logging: LogConfig::default(),
            fixtures_dir: PathBuf::from("fixtures"),
        }
    }
}

impl HarnessConfig {
    /// Load `<config_dir>/<environment>.toml`, without env overrides.
    ///
    /// A missing file yields defaults for that environment.
    pub fn load(config_dir: &Path, environment: &str) -> Result<Self> {
        let file = config_dir.join(format!("{}.toml", environment));
        let mut config = if file.exists() {
            debug!(file = %file.display(), "loading config");
            let text = std::fs::read_to_string(&file)?;
            Self::parse(&text)?
        } else {
            warn!(file = %file.display(), "config file not found, using defaults");
            Self::default()
        };
        config.environment = environment.to_string();
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load for the environment named by `RESTPROBE_ENV`, then apply
    /// process environment overrides.
    pub fn from_env(config_dir: &Path) -> Result<Self> {
        let environment =
            std::env::var(ENV_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        let mut config = Self::load(config_dir, &environment)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Override fields from a variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RESTPROBE_BASE_URL") {
            self.http.base_url = url;
        }
        if let Some(secs) = lookup("RESTPROBE_TIMEOUT_SECS") {
            self.http.timeout_secs = secs.trim().parse().map_err(|_| {
                HarnessError::Config(format!("RESTPROBE_TIMEOUT_SECS is not a number: {}", secs))
            })?;
        }
        if let Some(token) = lookup("RESTPROBE_AUTH_TOKEN") {
            self.http.auth_token = Some(token);
        }
        if let Some(level) = lookup("RESTPROBE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(file) = lookup("RESTPROBE_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
        if let Some(dir) = lookup("RESTPROBE_FIXTURES_DIR") {
            self.fixtures_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.http.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http.timeout_secs = secs;
        self
    }

    /// Add a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.headers.insert(name.into(), value.into());
        self
    }

    /// Set the bearer token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.http.auth_token = Some(token.into());
        self
    }

    /// Set the fixtures directory.
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }

    /// Set the log filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

type Loader = Box<dyn Fn() -> Result<HarnessConfig> + Send + Sync>;

/// Load-once holder for a shared configuration.
///
/// The first call to [`get_or_load`](ConfigCell::get_or_load) runs the
/// loader; concurrent first callers block until it finishes. The outcome,
/// success or failure, is cached and never retried.
pub struct ConfigCell {
    loader: Loader,
    config: OnceCell<std::result::Result<Arc<HarnessConfig>, String>>,
}

impl ConfigCell {
    /// Cell backed by a custom loader.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<HarnessConfig> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            config: OnceCell::new(),
        }
    }

    /// Cell that loads with [`HarnessConfig::from_env`].
    pub fn from_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self::new(move || HarnessConfig::from_env(&config_dir))
    }

    /// Cell already holding `config`.
    pub fn with_config(config: HarnessConfig) -> Self {
        let cell = Self::new(|| {
            Err(HarnessError::Config(
                "preloaded config cell has no loader".to_string(),
            ))
        });
        let _ = cell.config.set(Ok(Arc::new(config)));
        cell
    }

    /// Get the configuration, loading it on first use.
    pub fn get_or_load(&self) -> Result<Arc<HarnessConfig>> {
        self.config
            .get_or_init(|| {
                debug!("initializing shared config");
                (self.loader)().map(Arc::new).map_err(|e| e.to_string())
            })
            .clone()
            .map_err(HarnessError::Config)
    }

    /// Check if a load has already happened.
    pub fn is_loaded(&self) -> bool {
        self.config.get().is_some()
    }
}
