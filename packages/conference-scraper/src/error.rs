//! Typed errors for scrape operations.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Extraction itself
//! is infallible once a document snapshot exists; these errors all belong
//! to the fetch boundary.

use thiserror::Error;

/// Errors that can occur while turning a URL into a conference record.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Page could not be loaded into a document snapshot.
    ///
    /// Fatal to the call; there is no retry.
    #[error("document unavailable: {url}: {reason}")]
    DocumentUnavailable { url: String, reason: String },

    /// Input was not a fetchable URL
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
