//! Centralized error types for PPCA.

use thiserror::Error;

use crate::request::Operation;

/// Failure of the upstream completion call.
///
/// Never recovered locally: the request that triggered it fails as a whole.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode completion response: {0}")]
    Decode(String),

    #[error("completion response contained no text")]
    EmptyReply,

    #[error("no response within {secs}s")]
    Timeout { secs: u64 },
}

/// Main error type for PPCA operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Client-caused; never reaches the completion backend.
    #[error("{0}")]
    Validation(String),

    #[error("{provider} API error{}: {source}", .operation.error_context())]
    Upstream {
        provider: String,
        operation: Operation,
        #[source]
        source: UpstreamError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for PPCA operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
