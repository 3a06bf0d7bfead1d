//! opensearch-docs-mcp - OpenSearch knowledge search over MCP
//!
//! Lets MCP clients search the OpenSearch documentation site, the
//! project blog and the community forum.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - upstream (HTTP fetchers for the search endpoints)
//!   - search (LRU cache, result shaping, pagination)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! Every search call runs fetch (memoized per query/version/domain),
//! then shape, then paginate. Only the raw upstream hits are cached,
//! so different `limit`/`offset` values for one query share a single
//! upstream request.

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocsError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
