use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Installs the global subscriber. Logs go to stderr, or to `log_file` when set;
/// `RUST_LOG` takes precedence over the configured level.
///
/// The returned guard flushes the file writer and must be held until exit.
pub fn setup_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level '{}'", config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);

    let guard = match config.log_file.as_deref() {
        Some(log_file) => {
            let path = Path::new(log_file);
            let directory = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file '{}' has no file name", log_file))?;

            std::fs::create_dir_all(directory).with_context(|| {
                format!("failed to create log directory {}", directory.display())
            })?;

            let file_appender = RollingFileAppender::new(Rotation::NEVER, directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_writer(writer);

            tracing::subscriber::set_global_default(registry.with(file_layer))
                .context("Failed to set tracing subscriber")?;
            Some(guard)
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);

            tracing::subscriber::set_global_default(registry.with(stderr_layer))
                .context("Failed to set tracing subscriber")?;
            None
        }
    };

    tracing::debug!("Logging system initialized");
    Ok(guard)
}
