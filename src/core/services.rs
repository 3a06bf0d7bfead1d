//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{SearchCache, SearchService};
use crate::core::upstream::{HttpSearchBackend, SearchBackend};
use std::sync::Arc;

/// Unified services container
///
/// The MCP adapter and tests use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Memoizing cache in front of the upstream backend
    pub cache: Arc<SearchCache>,

    /// Search entry points (docs, blogs, forum)
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services talking to the configured upstream endpoints
    pub fn new(config: Config) -> Result<Self> {
        let backend = Arc::new(HttpSearchBackend::new(&config.upstream)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Create services over an explicit backend
    pub fn with_backend(config: Config, backend: Arc<dyn SearchBackend>) -> Self {
        let cache = Arc::new(SearchCache::new(backend, config.cache.capacity));

        let search = Arc::new(SearchService::new(
            Arc::clone(&cache),
            config.search.clone(),
        ));

        Self {
            cache,
            search,
            config: Arc::new(config),
        }
    }
}
