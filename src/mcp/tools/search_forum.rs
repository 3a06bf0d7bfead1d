//! Search forum tool handler

use super::handler::McpToolHandler;
use super::helpers::{envelope_content, parse_search_args, search_input_schema};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct SearchForumHandler {
    services: Arc<Services>,
}

impl SearchForumHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchForumHandler {
    fn name(&self) -> &str {
        "search_forum"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_forum".to_string(),
            description: "Search community threads on forum.opensearch.org. \
                         Returns JSON with query, total, offset, limit, hasMore and results \
                         [{title, url, author, snippet, created_at, tags, has_accepted_answer}]. \
                         \
                         BEST FOR: error messages, troubleshooting, real-world configuration \
                         questions. Prefer threads with has_accepted_answer=true. \
                         Forum search is not versioned."
                .to_string(),
            input_schema: search_input_schema(&self.services.config.search, false),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request = parse_search_args(args)?;
        let envelope = self.services.search.search_forum(request).await?;
        envelope_content(&envelope)
    }
}
