//! Get server info tool handler
//!
//! Returns version, configured upstream endpoints and cache statistics.

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServerInfoHandler {
    services: Arc<Services>,
}

impl GetServerInfoHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    async fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let config = &self.services.config;
        let stats = self.services.cache.stats().await;

        let mut output = String::from("# OpenSearch Docs MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** opensearch-docs-mcp\n");
        output.push_str("- **Description:** Search OpenSearch docs, blogs and forum\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Upstream\n");
        output.push_str(&format!(
            "- **Docs endpoint:** {}\n",
            config.upstream.docs_endpoint
        ));
        output.push_str(&format!(
            "- **Forum endpoint:** {}\n",
            config.upstream.forum_endpoint
        ));
        output.push_str(&format!(
            "- **Request timeout:** {}s\n\n",
            config.upstream.request_timeout_sec
        ));

        output.push_str("## Search Defaults\n");
        output.push_str(&format!(
            "- **Default limit:** {}\n",
            config.search.default_limit
        ));
        output.push_str(&format!("- **Max limit:** {}\n", config.search.max_limit));
        output.push_str(&format!(
            "- **Default version:** {}\n\n",
            config.search.default_version
        ));

        output.push_str("## Cache\n");
        output.push_str(&format!("- **Entries:** {}/{}\n", stats.size, stats.capacity));
        output.push_str(&format!("- **Hits:** {}\n", stats.hits));
        output.push_str(&format!("- **Misses:** {}\n\n", stats.misses));

        output.push_str("## Available Tools\n");
        output.push_str("- search_docs: Search OpenSearch documentation\n");
        output.push_str("- search_blogs: Search OpenSearch blog posts\n");
        output.push_str("- search_forum: Search forum.opensearch.org threads\n");
        output.push_str("- get_server_info: Show server information (this tool)\n");

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version and runtime information about the running \
                         opensearch-docs-mcp server. Returns server version, protocol version, \
                         upstream endpoints, search defaults and cache statistics. \
                         Does not contact the upstream services."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info().await))
    }
}
