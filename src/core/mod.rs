//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the MCP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **upstream**: HTTP client for the remote search endpoints
//! - **search**: Cache, shaping, pagination and entry points
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod upstream;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsError, Result};
pub use services::Services;
