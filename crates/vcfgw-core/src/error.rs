//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Validation
//! failures (client-caused) stop a request before any storage call; storage
//! failures (dependency-caused) surface as 500s.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client errors worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;

    /// Whether the error was caused by the request rather than a dependency
    fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request carried no usable file part.
    #[error("Missing file: {0}")]
    MissingFile(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFile(_) => (400, "MISSING_FILE", LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (400, "PAYLOAD_TOO_LARGE", LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", LogLevel::Error)
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile(msg)
            | AppError::InvalidInput(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Storage(msg) => msg.clone(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}

impl AppError {
    /// Variant name, used as a structured logging field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile(_) => "MissingFile",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "InternalWithSource",
        }
    }
}
