// Test helper functions

use async_trait::async_trait;
use opensearch_docs_mcp::core::config::Config;
use opensearch_docs_mcp::core::error::{DocsError, Result};
use opensearch_docs_mcp::core::services::Services;
use opensearch_docs_mcp::core::types::{Domain, RawHit, SearchKey};
use opensearch_docs_mcp::core::upstream::SearchBackend;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Backend serving fixed hits per domain and counting fetches
#[allow(dead_code)]
pub struct CountingBackend {
    docs: Vec<RawHit>,
    forum: Vec<RawHit>,
    calls: AtomicUsize,
    fail: AtomicBool,
}

#[allow(dead_code)]
impl CountingBackend {
    pub fn new(docs: Vec<RawHit>, forum: Vec<RawHit>) -> Self {
        Self {
            docs,
            forum,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Number of fetches that reached the backend
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make subsequent fetches fail with an upstream error
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SearchBackend for CountingBackend {
    async fn fetch(&self, key: &SearchKey) -> Result<Vec<RawHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(DocsError::Upstream("HTTP 502 Bad Gateway".to_string()));
        }

        Ok(match key.domain {
            Domain::Forum => self.forum.clone(),
            Domain::Docs | Domain::Blogs => self.docs.clone(),
        })
    }
}

/// Services over a counting backend with default configuration
#[allow(dead_code)]
pub fn create_test_services(backend: Arc<CountingBackend>) -> Arc<Services> {
    Arc::new(Services::with_backend(Config::default(), backend))
}
