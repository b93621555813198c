/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not valid configuration JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a configuration directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,
}
