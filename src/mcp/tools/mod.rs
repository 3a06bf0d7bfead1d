//! MCP tool implementations
//!
//! Each handler exposes one search domain (or server introspection)
//! to MCP clients.

pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod registry;
pub mod search_blogs;
pub mod search_docs;
pub mod search_forum;


pub use get_server_info::GetServerInfoHandler;
pub use handler::{text_content, McpToolHandler};
pub use helpers::{envelope_content, parse_search_args, search_input_schema};
pub use registry::ToolRegistry;
pub use search_blogs::SearchBlogsHandler;
pub use search_docs::SearchDocsHandler;
pub use search_forum::SearchForumHandler;
