//! Bounded memoizing cache in front of the upstream search backend.
//!
//! Results are memoized per [`SearchKey`] with least-recently-used
//! eviction. Failed fetches are never stored. Concurrent misses on the
//! same key are not deduplicated; both callers fetch and the later
//! insert wins.

use crate::core::error::Result;
use crate::core::types::{RawHit, SearchKey};
use crate::core::upstream::SearchBackend;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cache statistics for diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

struct CacheState {
    lru: LruCache<SearchKey, Arc<Vec<RawHit>>>,
    hits: u64,
    misses: u64,
}

/// Memoizing wrapper around a [`SearchBackend`]
pub struct SearchCache {
    backend: Arc<dyn SearchBackend>,
    state: Mutex<CacheState>,
}

impl SearchCache {
    /// Create an empty cache holding at most `capacity` keys
    ///
    /// A zero capacity is bumped to one.
    pub fn new(backend: Arc<dyn SearchBackend>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            backend,
            state: Mutex::new(CacheState {
                lru: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Return cached hits for `key`, fetching from upstream on a miss
    pub async fn get_or_fetch(&self, key: &SearchKey) -> Result<Arc<Vec<RawHit>>> {
        {
            let mut state = self.state.lock().await;
            if let Some(hits) = state.lru.get(key).cloned() {
                state.hits += 1;
                tracing::debug!(domain = %key.domain, query = %key.query, "Cache hit");
                return Ok(hits);
            }
            state.misses += 1;
        }

        tracing::debug!(domain = %key.domain, query = %key.query, "Cache miss");

        // Lock released while the upstream request is in flight
        let hits = Arc::new(self.backend.fetch(key).await?);

        let mut state = self.state.lock().await;
        // push returns the replaced entry on a racing insert, the evicted one otherwise
        if let Some((evicted, _)) = state
            .lru
            .push(key.clone(), Arc::clone(&hits))
            .filter(|(k, _)| k != key)
        {
            tracing::debug!(
                domain = %evicted.domain,
                query = %evicted.query,
                "Evicted least recently used entry"
            );
        }

        Ok(hits)
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.lru.len(),
            capacity: state.lru.cap().get(),
        }
    }

    /// Check whether `key` is currently cached (does not touch recency)
    pub async fn contains(&self, key: &SearchKey) -> bool {
        self.state.lock().await.lru.contains(key)
    }

    /// Drop every entry and reset the counters
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.lru.clear();
        state.hits = 0;
        state.misses = 0;
        tracing::info!("Search cache cleared");
    }
}
