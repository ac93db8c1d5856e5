//! Unified error types for mcp-everything.
//!
//! Every failure a `search` call can produce is one of these variants. Each
//! maps to a stable MCP error code so clients can tell a bad request apart
//! from an unreachable Everything instance.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the mcp-everything server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed tool arguments (empty query, out-of-range maxResults, ...).
    #[error("VALIDATION_ERROR: {0}")]
    Validation(String),

    /// The Everything HTTP server could not be reached.
    #[error("UNAVAILABLE: {0}")]
    Unavailable(String),

    /// The Everything HTTP server did not answer within the configured timeout.
    #[error("TIMEOUT: {0}")]
    Timeout(String),

    /// The response body did not have the expected `{ totalResults, results }` shape.
    #[error("PROTOCOL_ERROR: {0}")]
    Protocol(String),

    /// Any other transport or HTTP status failure.
    #[error("EXTERNAL_SERVICE_ERROR: {0}")]
    ExternalService(String),
}

impl Error {
    /// Numeric MCP error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Error::Validation(_) => -32602,
            Error::Unavailable(_) => -32001,
            Error::Timeout(_) => -32002,
            Error::Protocol(_) => -32003,
            Error::ExternalService(_) => -32004,
        }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = err.code();
        let message = match err {
            Error::Validation(msg) => msg,
            Error::Unavailable(msg) => msg,
            Error::Timeout(msg) => format!("Everything search timed out: {msg}"),
            Error::Protocol(msg) => format!("Everything API error: {msg}"),
            Error::ExternalService(msg) => format!("Everything search failed: {msg}"),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
