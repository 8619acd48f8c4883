//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading or validating thresholds
#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Threshold TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid threshold configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during video compression
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Required tool not found on PATH: {0}")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Transcode of {} failed ({}): {}", .file.display(), .status, .stderr)]
    TranscodeFailed {
        file: PathBuf,
        status: String,
        stderr: String,
    },
}
