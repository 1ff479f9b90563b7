//! Tracing setup: console output plus a rotating file log.
//!
//! DESIGN
//! ======
//! Console lines go through the fmt subscriber as usual. The same events are
//! also written, without ANSI colors, to `<LOG_DIR>/app.<date>.log` through a
//! non-blocking writer. Files roll daily and only the newest
//! `LOG_MAX_FILES` are kept.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_MAX_FILES: usize = 10;
pub const LOG_FILE_PREFIX: &str = "app";
pub const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub max_files: usize,
}

impl LogConfig {
    /// Read `LOG_DIR` (default `logs`) and `LOG_MAX_FILES` (default 10).
    pub fn from_env() -> Self {
        let dir = std::env::var("LOG_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);
        let max_files = std::env::var("LOG_MAX_FILES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_LOG_MAX_FILES);
        Self { dir, max_files }
    }
}

/// Build the daily-rolling file appender, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn file_appender(config: &LogConfig) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(&config.dir)
}

/// Install the global subscriber. `RUST_LOG` filters both outputs (default `info`).
///
/// The returned guard must be held for the life of the process.
///
/// # Errors
///
/// Returns an error if the file appender cannot be created.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, InitError> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(config)?);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
