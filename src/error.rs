//! Error types for stillgrove.

use thiserror::Error;

/// All errors that can surface from stillgrove operations.
#[derive(Debug, Error)]
pub enum StillgroveError {
    /// Configuration problem (missing home, bad values, file handling).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing, or event handling failure.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A duration argument that could not be parsed.
    #[error("Invalid duration: {0} (try formats like '5m', '90s', '1h30m')")]
    InvalidDuration(String),

    /// I/O failure reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config parse or serialization failure.
    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
