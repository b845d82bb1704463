//! Logging configuration using the tracing ecosystem.
//!
//! Rendered markup goes to stdout, so log output is written to a daily
//! rotating file instead of the terminal.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "jiramark=info,warn";

/// Log level used with `--verbose` when RUST_LOG is not set.
const VERBOSE_LOG_FILTER: &str = "jiramark=debug,warn";

/// Initialize the logging system.
///
/// Logs are stored in the platform-specific local data directory:
/// - Linux: `~/.local/share/jiramark/logs/`
/// - macOS: `~/Library/Application Support/jiramark/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\jiramark\logs\`
///
/// `RUST_LOG` takes precedence over `verbose`.
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - The tracing subscriber cannot be set
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "jiramark.log");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jiramark starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("jiramark").join("logs"))
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("jiramark shutting down");
}
