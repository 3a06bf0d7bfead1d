//! Search docs tool handler

use super::handler::McpToolHandler;
use super::helpers::{envelope_content, parse_search_args, search_input_schema};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct SearchDocsHandler {
    services: Arc<Services>,
}

impl SearchDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchDocsHandler {
    fn name(&self) -> &str {
        "search_docs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_docs".to_string(),
            description: "Search the official OpenSearch documentation (docs.opensearch.org). \
                         Returns JSON with query, version, total, offset, limit, hasMore and \
                         results [{title, url, snippet}]. Snippets are capped at 300 characters; \
                         open the url for the full page. \
                         \
                         BEST FOR: configuration reference, API syntax, installation steps, \
                         plugin and feature documentation for a specific OpenSearch version. \
                         \
                         PAGINATION: when hasMore is true, call again with offset = offset + limit. \
                         Repeated queries are served from an in-memory cache."
                .to_string(),
            input_schema: search_input_schema(&self.services.config.search, true),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request = parse_search_args(args)?;
        let envelope = self.services.search.search_docs(request).await?;
        envelope_content(&envelope)
    }
}
