//! Helper functions shared by the search tools

use super::handler::text_content;
use crate::core::config::SearchConfig;
use crate::core::types::{ResponseEnvelope, SearchRequest};
use crate::mcp::error::McpError;
use crate::mcp::protocol::ToolResult;
use serde_json::{json, Value};

/// Parse tool arguments into a search request
///
/// Type errors (e.g. `"limit": "ten"`) become InvalidParams; range
/// checks happen in the search service.
pub fn parse_search_args(args: Value) -> Result<SearchRequest, McpError> {
    if args.is_null() {
        return Err(McpError::InvalidParams(
            "Missing arguments: 'query' is required".to_string(),
        ));
    }

    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Serialize the envelope as a compact JSON text block
pub fn envelope_content(envelope: &ResponseEnvelope) -> Result<ToolResult, McpError> {
    let text = serde_json::to_string(envelope)?;
    Ok(text_content(text))
}

/// JSON schema for search tool arguments
pub fn search_input_schema(settings: &SearchConfig, versioned: bool) -> Value {
    let mut properties = json!({
        "query": {
            "type": "string",
            "description": "Search terms, e.g. 'k-NN vector search' or 'snapshot restore'",
            "minLength": 1,
            "maxLength": settings.max_query_length
        },
        "limit": {
            "type": "integer",
            "description": format!(
                "Maximum results to return (default {}, max {})",
                settings.default_limit, settings.max_limit
            ),
            "default": settings.default_limit,
            "minimum": 1,
            "maximum": settings.max_limit
        },
        "offset": {
            "type": "integer",
            "description": "Number of results to skip, for pagination (default 0)",
            "default": 0,
            "minimum": 0
        }
    });

    if versioned {
        properties["version"] = json!({
            "type": "string",
            "description": format!(
                "OpenSearch version to search, e.g. '3.0' or '2.19' (default '{}')",
                settings.default_version
            ),
            "default": settings.default_version
        });
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": ["query"]
    })
}
