//! MCP-specific error types

use crate::mcp::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR, UPSTREAM_FAILED,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn to_rpc_error(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<crate::core::error::DocsError> for McpError {
    fn from(err: crate::core::error::DocsError) -> Self {
        use crate::core::error::DocsError;
        match err {
            DocsError::InvalidParameter(s) => McpError::InvalidParams(s),
            DocsError::Upstream(s) => {
                McpError::ToolError(UPSTREAM_FAILED, format!("Upstream search failed: {s}"))
            }
            DocsError::Config(s) => McpError::InternalError(format!("Configuration error: {s}")),
            DocsError::Io(e) => McpError::InternalError(format!("I/O error: {e}")),
            DocsError::Serde(e) => McpError::InternalError(format!("Serialization error: {e}")),
            DocsError::Toml(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
