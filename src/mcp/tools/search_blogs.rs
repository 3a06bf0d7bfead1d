//! Search blogs tool handler

use super::handler::McpToolHandler;
use super::helpers::{envelope_content, parse_search_args, search_input_schema};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct SearchBlogsHandler {
    services: Arc<Services>,
}

impl SearchBlogsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchBlogsHandler {
    fn name(&self) -> &str {
        "search_blogs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_blogs".to_string(),
            description: "Search OpenSearch project blog posts: release announcements, \
                         feature deep-dives, benchmarks and community updates. \
                         Returns the same JSON shape as search_docs \
                         (results [{title, url, snippet}], snippets capped at 300 characters). \
                         Use search_docs for reference material and search_forum for \
                         troubleshooting threads."
                .to_string(),
            input_schema: search_input_schema(&self.services.config.search, true),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request = parse_search_args(args)?;
        let envelope = self.services.search.search_blogs(request).await?;
        envelope_content(&envelope)
    }
}
