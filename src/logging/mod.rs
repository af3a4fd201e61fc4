//! Tracing subscriber initialization.
//!
//! The engine emits `tracing` events (namespace switches, offset
//! invalidations, dropped reports); hosts that want them on disk can call
//! [`init`] once at startup. Embedders with their own subscriber skip this
//! module entirely.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while setting up file-based logging.
#[derive(Debug, Error)]
pub enum LogSetupError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("unusable log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global tracing subscriber is already installed.
    #[error("tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Install a file-writing tracing subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`. The log directory is created
/// if missing; output carries no ANSI escapes so the file stays greppable.
pub fn init(log_path: &Path) -> Result<(), LogSetupError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path
        .parent()
        .ok_or_else(|| LogSetupError::InvalidPath(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LogSetupError::InvalidPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LogSetupError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LogSetupError::AlreadyInitialized)
}
