//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::BookmarkerError;

/// 默认日志文件名
pub const DEFAULT_LOG_FILE: &str = "bookmarker.log";

/// Initialize logging system based on configuration
///
/// Sets up file output, log rotation, and formatting.
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<tracing_appender::non_blocking::WorkerGuard, BookmarkerError> {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.file.as_deref() {
        Some(log_file) if !log_file.is_empty() && config.enable_rotation => {
            // Use rolling log files
            let path = std::path::Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    BookmarkerError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) if !log_file.is_empty() => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        // Empty filename or none: console
        _ => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.file.as_ref().is_none_or(|f| f.is_empty()));

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| BookmarkerError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

/// TUI 模式下日志不能写到终端，否则会破坏界面
pub fn tui_logging_config(config: &LoggingConfig) -> LoggingConfig {
    let mut config = config.clone();
    if config.file.as_ref().is_none_or(|f| f.is_empty()) {
        config.file = Some(DEFAULT_LOG_FILE.to_string());
    }
    config
}
