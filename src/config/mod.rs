//! Application configuration, read from a JSON file.
//!
//! The file lives at `~/.config/carsales/config.json`. It is optional: a
//! missing file, or missing keys within it, fall back to [`Config::default`].

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Default maximum number of cars a single manufacturer may hold.
pub const DEFAULT_MAX_CARS_PER_MANUFACTURER: usize = 20;
/// Default maximum number of distinct manufacturers.
pub const DEFAULT_MAX_MANUFACTURERS: usize = 20;

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manufacturer limit: cars allowed per manufacturer.
    pub max_cars_per_manufacturer: usize,
    /// Manufacturer cap: distinct manufacturers allowed in the collection.
    pub max_manufacturers: usize,
    /// Level written to the log file.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cars_per_manufacturer: DEFAULT_MAX_CARS_PER_MANUFACTURER,
            max_manufacturers: DEFAULT_MAX_MANUFACTURERS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Loads the configuration from the XDG config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path()?)
    }

    /// Loads the configuration from `path`, or returns defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns `~/.config/carsales/config.json` (or the platform equivalent).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("carsales").join("config.json"))
}
