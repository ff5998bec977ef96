//! Log setup
//!
//! Logs to stderr, and to a daily rotating file when a log directory is set.
//! stdout is left to the run report.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,pi_record=info";

/// Initialize logging, optionally with rotating file logs in `log_dir`
pub fn init_logging(log_dir: Option<&Path>) -> Result<()> {
    // Environment filter - can be overridden with RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;

            // Rotates daily: pi_record.log.YYYY-MM-DD
            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "pi_record.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The writer must outlive every log call; logging lasts the whole program
            std::mem::forget(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    match log_dir {
        Some(dir) => tracing::debug!("Logging initialized. Log directory: {}", dir.display()),
        None => tracing::debug!("Logging initialized (console only)"),
    }
    Ok(())
}
