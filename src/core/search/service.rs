//! Search entry points.
//!
//! Validates caller parameters and runs the cache -> shape -> paginate
//! pipeline for each content domain.

use super::cache::SearchCache;
use super::paginator::paginate;
use super::shaper::shape;
use crate::core::config::SearchConfig;
use crate::core::error::{DocsError, Result};
use crate::core::types::{Domain, ResponseEnvelope, SearchKey, SearchRequest};
use std::sync::Arc;
use std::time::Instant;

/// Validated request parameters
#[derive(Debug, Clone, PartialEq)]
struct Params {
    version: Option<String>,
    limit: usize,
    offset: usize,
}

/// Search service shared by every tool
pub struct SearchService {
    cache: Arc<SearchCache>,
    settings: SearchConfig,
}

impl SearchService {
    pub fn new(cache: Arc<SearchCache>, settings: SearchConfig) -> Self {
        Self { cache, settings }
    }

    /// Search documentation pages
    pub async fn search_docs(&self, request: SearchRequest) -> Result<ResponseEnvelope> {
        self.search(Domain::Docs, request).await
    }

    /// Search blog posts
    pub async fn search_blogs(&self, request: SearchRequest) -> Result<ResponseEnvelope> {
        self.search(Domain::Blogs, request).await
    }

    /// Search community forum threads
    pub async fn search_forum(&self, request: SearchRequest) -> Result<ResponseEnvelope> {
        self.search(Domain::Forum, request).await
    }

    /// Run the full pipeline for `domain`
    pub async fn search(&self, domain: Domain, request: SearchRequest) -> Result<ResponseEnvelope> {
        let start = Instant::now();
        let params = self.validate(domain, &request)?;

        let key = SearchKey::new(
            request.query.clone(),
            params.version.clone().unwrap_or_default(),
            domain,
        );
        let hits = self.cache.get_or_fetch(&key).await?;

        let batch = shape(domain, &hits);
        let page = paginate(&batch.results, params.offset, params.limit);

        tracing::debug!(
            %domain,
            query = %request.query,
            total = page.total,
            returned = page.items.len(),
            skipped = batch.skipped.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(ResponseEnvelope {
            query: request.query,
            version: params.version,
            total: page.total,
            offset: params.offset,
            limit: params.limit,
            has_more: page.has_more,
            results: page.items,
        })
    }

    fn validate(&self, domain: Domain, request: &SearchRequest) -> Result<Params> {
        if request.query.trim().is_empty() {
            return Err(DocsError::InvalidParameter(
                "query cannot be empty".to_string(),
            ));
        }

        let query_len = request.query.chars().count();
        if query_len > self.settings.max_query_length {
            return Err(DocsError::InvalidParameter(format!(
                "query is {query_len} characters, maximum is {}",
                self.settings.max_query_length
            )));
        }

        let limit = request
            .limit
            .unwrap_or(self.settings.default_limit as i64);
        if limit < 1 {
            return Err(DocsError::InvalidParameter(format!(
                "limit must be at least 1, got {limit}"
            )));
        }
        if limit as u64 > self.settings.max_limit as u64 {
            return Err(DocsError::InvalidParameter(format!(
                "limit cannot exceed {}, got {limit}",
                self.settings.max_limit
            )));
        }

        let offset = request.offset.unwrap_or(0);
        if offset < 0 {
            return Err(DocsError::InvalidParameter(format!(
                "offset must be >= 0, got {offset}"
            )));
        }

        let version = domain.is_versioned().then(|| {
            request
                .version
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(&self.settings.default_version)
                .to_string()
        });

        Ok(Params {
            version,
            limit: limit as usize,
            offset: usize::try_from(offset).unwrap_or(usize::MAX),
        })
    }

    pub fn cache(&self) -> &Arc<SearchCache> {
        &self.cache
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }
}
