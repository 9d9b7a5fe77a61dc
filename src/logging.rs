//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a daily rolling file under
//! the user's cache directory. The filter is read from `LAZYFLOW_LOG` using
//! `tracing-subscriber`'s env-filter syntax and defaults to `info`.

use std::path::PathBuf;

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LAZYFLOW_LOG";

const LOG_FILE: &str = "lazyflow.log";

/// Directory the log files are written to.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be determined.
pub fn log_dir() -> Result<PathBuf> {
    let mut path = dirs::cache_dir().ok_or_else(|| {
        color_eyre::eyre::eyre!("Could not determine cache directory for log files")
    })?;
    path.push("lazyflow");
    path.push("logs");
    Ok(path)
}

/// Build the filter from `LAZYFLOW_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// The returned guard flushes pending events when dropped and must be kept
/// alive for the lifetime of the program.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(env_filter()),
        )
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!(dir = %dir.display(), "logging started");
    Ok(guard)
}
