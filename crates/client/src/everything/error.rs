//! Everything HTTP client error types.

use std::sync::Arc;
use std::time::Duration;

/// Errors from the Everything HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum EverythingError {
    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid maxResults parameter (must be 1-1000).
    #[error("invalid maxResults: {0} (must be between 1 and 1000)")]
    InvalidMaxResults(i64),

    /// Invalid offset parameter (must not be negative).
    #[error("invalid offset: {0} (must be 0 or greater)")]
    InvalidOffset(i64),

    /// Unknown sort field.
    #[error("invalid sortBy: {0} (expected one of name, path, size, date_modified)")]
    InvalidSort(String),

    /// Nothing is listening at the configured address.
    #[error(
        "cannot connect to Everything at {url}. Make sure Everything is running and enable the HTTP server \
         (Tools > Options > HTTP Server > Enable HTTP server) on the configured port"
    )]
    Unavailable { url: String },

    /// Request timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body does not have the expected shape.
    #[error("invalid response shape: {0}")]
    InvalidResponse(String),
}

impl EverythingError {
    /// Whether this error was caused by the caller's arguments.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EverythingError::InvalidQuery(_)
                | EverythingError::InvalidMaxResults(_)
                | EverythingError::InvalidOffset(_)
                | EverythingError::InvalidSort(_)
        )
    }
}
