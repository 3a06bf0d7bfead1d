//! Error types for the OpenSearch docs search service.
//!
//! This module defines the error types used by the core pipeline.
//! Protocol-specific error handling (MCP error codes) is handled in
//! the MCP adapter.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Main error type for the search pipeline
#[derive(Error, Debug)]
pub enum DocsError {
    /// Caller-supplied arguments were rejected before any upstream call
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The upstream search provider failed or returned garbage
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DocsError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is correctable by the caller
    pub fn is_bad_request(&self) -> bool {
        matches!(self, DocsError::InvalidParameter(_))
    }

    /// Check if this error originated at the upstream provider
    pub fn is_upstream(&self) -> bool {
        matches!(self, DocsError::Upstream(_))
    }
}

impl From<reqwest::Error> for DocsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DocsError::Upstream(format!("request timed out: {err}"))
        } else if err.is_decode() {
            DocsError::Upstream(format!("malformed response: {err}"))
        } else {
            DocsError::Upstream(err.to_string())
        }
    }
}
