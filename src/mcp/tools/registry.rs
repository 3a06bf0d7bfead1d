//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry for all available MCP tools
///
/// Keyed by tool name; listing order is alphabetical so tools/list
/// output is stable.
pub struct ToolRegistry {
    handlers: BTreeMap<String, Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Register a tool handler, replacing any tool with the same name
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        let name = handler.name().to_string();
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.get(name)
    }

    /// List all available tool schemas
    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers
            .values()
            .map(|handler| handler.schema())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
