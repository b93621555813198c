//! File-backed logging.
//!
//! The terminal is in raw alternate-screen mode while the app runs, so log
//! records go to `~/.local/share/carsales/carsales.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Errors that can occur while setting up the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    /// The log file could not be created or opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("logger already initialised: {0}")]
    AlreadySet(#[from] log::SetLoggerError),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}

/// Returns `~/.local/share/carsales/carsales.log` (or the platform equivalent).
pub fn default_log_path() -> Result<PathBuf, LogInitError> {
    let data_dir = dirs::data_dir().ok_or(LogInitError::NoDataDir)?;
    Ok(data_dir.join("carsales").join("carsales.log"))
}

/// Installs the global logger, appending to the file at `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(level: LevelFilter, path: &Path) -> Result<(), LogInitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}
