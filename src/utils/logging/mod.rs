//! Log subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AppError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| AppError::internal(format!("Failed to install log subscriber: {}", e)))
}

/// Filter from an explicit `RUST_LOG` value, else from the configured level
pub fn filter_from(rust_log: Option<String>, level: &str) -> Result<EnvFilter> {
    match rust_log.filter(|value| !value.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            AppError::config(format!("Invalid {} '{}': {}", EnvFilter::DEFAULT_ENV, directives, e))
        }),
        None => EnvFilter::try_new(level)
            .map_err(|e| AppError::config(format!("Invalid log level '{}': {}", level, e))),
    }
}
