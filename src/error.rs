//! Application error type.
//!
//! Command handlers convert `AppError` to `String` at the IPC boundary via
//! `map_err(|e| e.to_string())`; everything below the commands layer returns
//! `crate::error::Result`.

/// Unified error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Preview error: {0}")]
    Preview(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
