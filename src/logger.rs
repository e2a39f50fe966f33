//! Logging setup
//!
//! The crate logs through the `log` facade; this module wires it to `fern`.
//! With logging enabled, records at the configured level go to a file in the
//! user's cache directory. Otherwise only warnings and errors reach stderr.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Build the log dispatch for a logging configuration without installing it.
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let base = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{} {} {}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            message
        ))
    });

    if !config.enabled {
        return Ok(base.level(log::LevelFilter::Warn).chain(std::io::stderr()));
    }

    let level = config.level_filter()?;
    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let log_file =
        fern::log_file(&log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    Ok(base.level(level).chain(log_file))
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    dispatch(config)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Logger already initialized: {}", e))?;
    log::debug!("Logging initialized (enabled: {})", config.enabled);
    Ok(())
}

/// Path of the log file used when logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
