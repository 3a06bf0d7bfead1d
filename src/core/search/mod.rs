//! Search pipeline.
//!
//! Every tool call runs the same stages:
//!
//! - **cache**: memoizes upstream hits per (query, version, domain)
//! - **shaper**: maps raw hits into compact public records
//! - **paginator**: offset/limit slicing with total/hasMore metadata
//! - **service**: parameter validation and envelope assembly
//!
//! # Safety
//!
//! Snippets are truncated with `char_indices()` so multi-byte text
//! is never split inside a character.

pub mod cache;
pub mod paginator;
pub mod service;
pub mod shaper;

pub use cache::{CacheStats, SearchCache};
pub use paginator::{paginate, Page};
pub use service::SearchService;
pub use shaper::{shape, truncate_chars, ShapeError, ShapedBatch};
