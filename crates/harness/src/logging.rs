//! Console and file logging
//!
//! Built on `tracing-subscriber`. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::LogConfig;
use crate::error::{HarnessError, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide subscriber.
///
/// Returns `Ok(false)` if a global subscriber was already installed, so
/// every test may call this.
pub fn init(config: &LogConfig) -> Result<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| HarnessError::Logging(e.to_string()))?;

    let console = fmt::layer().with_ansi(config.ansi).with_target(false);

    let file = match &config.file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_appender(path)?),
        ),
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .is_ok())
}

/// Run `f` with a thread-local subscriber at `level`.
///
/// Other threads keep their own subscriber, so concurrently running tests
/// can log at different verbosities.
pub fn with_verbosity<T>(level: &str, f: impl FnOnce() -> T) -> Result<T> {
    let filter = EnvFilter::try_new(level).map_err(|e| HarnessError::Logging(e.to_string()))?;
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_test_writer().with_target(false));
    Ok(tracing::subscriber::with_default(subscriber, f))
}

/// Non-rotating appender for `path`, creating its directory.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| HarnessError::Logging(format!("no file name in {}", path.display())))?;

    std::fs::create_dir_all(dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| HarnessError::Logging(e.to_string()))
}
