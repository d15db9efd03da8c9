//! Structured logging setup.
//!
//! Server log output is duplicated to a fixed log file and stdout for the
//! process lifetime. Release mode emits JSON to stdout for machine parsing;
//! other modes stay human-readable.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::RunMode;

/// Directory holding the application log.
pub const LOG_DIR: &str = "logs";
/// Fixed relative path of the application log file.
pub const LOG_FILE: &str = "logs/app.log";

/// Error type for log setup; any failure here stops startup.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the process-wide subscriber: stdout plus `logs/app.log`.
///
/// Irreversible for the process lifetime; calling twice is an error.
pub fn init(mode: RunMode) -> Result<(), LoggingError> {
    init_at(mode, Path::new(LOG_FILE))
}

/// As `init`, with an explicit file path.
pub fn init_at(mode: RunMode, log_file: &Path) -> Result<(), LoggingError> {
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = File::create(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_filter()));

    let stdout_layer = if mode.json_logs() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().compact().boxed()
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
