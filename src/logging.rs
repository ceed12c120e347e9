//! Log subscriber setup. The terminal is owned by the UI, so events go to a
//! file or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LogInitError;

/// Install the global subscriber. Returns `false` when no log file is
/// configured and nothing was installed. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init(config: &LoggingConfig) -> Result<bool, LogInitError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogInitError::FileOpen {
            path: path.clone(),
            source,
        })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
        .try_init()?;

    Ok(true)
}
