//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary decides where they go.
//! The terminal UI owns stdout and stderr, so events are written to a log
//! file, and only when one is configured. Filtering follows `RUST_LOG`,
//! defaulting to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use camino::Utf8Path;
use tracing_subscriber::{EnvFilter, fmt};

use crate::api::ApiError;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a global subscriber that appends plain-text events to `path`.
///
/// Returns `false` when another subscriber was already installed; events
/// then keep flowing to that subscriber.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the log file cannot be opened.
pub fn init_file_logging(path: &Utf8Path) -> Result<bool, ApiError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| ApiError::Io {
            message: format!("cannot open log file {path}: {error}"),
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(log_file = %path, "logging initialised");
    }
    Ok(installed)
}
