//! Logging system initialization
//!
//! This module sets up the tracing subscriber from the `[logging]` section
//! of the static configuration.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::errors::{BadgeError, Result};

/// Initialize logging system based on configuration
///
/// Output goes to stdout unless `logging.file` is set, in which case it is
/// appended to that file (rolled daily when `enable_rotation` is on).
///
/// **Note**: This should be called only once during application startup.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if config.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("visit-badge.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    BadgeError::file_operation(format!(
                        "Failed to create rolling log appender in {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_new(&config.level).map_err(|e| {
        BadgeError::config(format!("Invalid logging.level '{}': {}", config.level, e))
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| BadgeError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}
