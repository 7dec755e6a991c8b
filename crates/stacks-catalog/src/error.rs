//! Catalog lookup error types.

use thiserror::Error;

/// Errors that can occur when talking to the external catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a catalog response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The identifier is not a catalog work or edition key.
    #[error("invalid catalog identifier: {0}")]
    InvalidIdentifier(String),

    /// The catalog returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The lookup did not settle within the configured bound.
    #[error("catalog lookup timed out after {secs}s")]
    TimedOut {
        /// Configured timeout in seconds.
        secs: u64,
    },
}

impl CatalogError {
    /// Whether re-issuing the same lookup could plausibly succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::RateLimited { .. } | Self::TimedOut { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Parse(_) | Self::InvalidIdentifier(_) => false,
        }
    }
}
