//! Error types for ftpaudit

use thiserror::Error;

/// Result type alias using the ftpaudit Error
pub type Result<T> = std::result::Result<T, Error>;

/// ftpaudit error types
#[derive(Error, Debug)]
pub enum Error {
    // === Audit Errors ===
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Cannot read config file {path}: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // === Baseline Errors ===
    #[error("Invalid baseline definition: {message}")]
    InvalidBaseline { message: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get an error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            Error::FileNotFound { .. } => "FILE_NOT_FOUND",
            Error::FileUnreadable { .. } => "FILE_UNREADABLE",
            Error::InvalidBaseline { .. } => "INVALID_BASELINE",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
