//! Typed errors for backend calls.

use thiserror::Error;

/// Errors from the draft backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend error: {status} {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
