//! Core data types for the search pipeline.
//!
//! This module defines the cache key, the raw upstream hit, the
//! shaped public results and the response envelope returned by the
//! search tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public URL prefix for documentation and blog results
pub const DOCS_URL_PREFIX: &str = "https://docs.opensearch.org";

/// Public URL prefix for forum thread results
pub const FORUM_URL_PREFIX: &str = "https://forum.opensearch.org/t/";

/// Maximum snippet length in characters (not bytes!)
pub const SNIPPET_MAX_CHARS: usize = 300;

/// Content domain searched by a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Docs,
    Blogs,
    Forum,
}

impl Domain {
    /// Category name understood by the upstream search API
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Docs => "docs",
            Domain::Blogs => "blogs",
            Domain::Forum => "forum",
        }
    }

    /// Prefix every public result URL in this domain must carry
    pub fn url_prefix(&self) -> &'static str {
        match self {
            Domain::Docs | Domain::Blogs => DOCS_URL_PREFIX,
            Domain::Forum => FORUM_URL_PREFIX,
        }
    }

    /// Whether results in this domain are scoped to a product version
    pub fn is_versioned(&self) -> bool {
        !matches!(self, Domain::Forum)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a cached upstream query
///
/// Two keys are equal iff query, version and domain all match
/// exactly. No normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub version: String,
    pub domain: Domain,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, version: impl Into<String>, domain: Domain) -> Self {
        Self {
            query: query.into(),
            version: version.into(),
            domain,
        }
    }
}

/// A single hit as returned by the upstream provider, normalized
/// across providers but not yet validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawHit {
    pub title: Option<String>,

    /// Absolute URL (relative upstream paths are resolved by the fetcher)
    pub url: Option<String>,

    /// Free text used for snippet extraction
    pub body: String,

    // Forum-only attributes
    pub author: Option<String>,
    pub created_at: Option<String>,
    pub tags: Vec<String>,
    pub has_accepted_answer: bool,
}

/// Documentation or blog search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Forum thread search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumResult {
    pub title: String,
    pub url: String,
    pub author: String,
    pub snippet: String,
    pub created_at: String,
    pub tags: Vec<String>,
    pub has_accepted_answer: bool,
}

/// Shaped public record for any domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapedResult {
    Forum(ForumResult),
    Doc(DocResult),
}

impl ShapedResult {
    pub fn title(&self) -> &str {
        match self {
            ShapedResult::Doc(r) => &r.title,
            ShapedResult::Forum(r) => &r.title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ShapedResult::Doc(r) => &r.url,
            ShapedResult::Forum(r) => &r.url,
        }
    }

    pub fn snippet(&self) -> &str {
        match self {
            ShapedResult::Doc(r) => &r.snippet,
            ShapedResult::Forum(r) => &r.snippet,
        }
    }
}

/// Search request as received by a tool entry point
///
/// Limit and offset are signed so negative values can be rejected
/// with a proper error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub offset: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            version: None,
            limit: None,
            offset: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Response returned by every search tool
///
/// `version` is omitted from the JSON for forum searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Size of the full shaped result set before pagination
    pub total: usize,

    pub offset: usize,

    pub limit: usize,

    #[serde(rename = "hasMore")]
    pub has_more: bool,

    pub results: Vec<ShapedResult>,
}
