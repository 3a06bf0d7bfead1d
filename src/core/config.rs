//! Configuration management for the OpenSearch docs MCP server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Upstream search provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Search API serving documentation and blog posts
    #[serde(default = "default_docs_endpoint")]
    pub docs_endpoint: String,

    /// Discourse search endpoint for the community forum
    #[serde(default = "default_forum_endpoint")]
    pub forum_endpoint: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Result cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of distinct queries kept in memory
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

/// Search tool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Page size when the caller does not pass `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest page size a caller may request
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Documentation version searched when the caller does not pass one
    #[serde(default = "default_version")]
    pub default_version: String,

    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_docs_endpoint() -> String {
    "https://search-api.opensearch.org/search".to_string()
}

fn default_forum_endpoint() -> String {
    "https://forum.opensearch.org/search.json".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("opensearch-docs-mcp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_cache_capacity() -> usize {
    100
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    50
}

fn default_version() -> String {
    "latest".to_string()
}

fn default_max_query_length() -> usize {
    500
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            docs_endpoint: default_docs_endpoint(),
            forum_endpoint: default_forum_endpoint(),
            request_timeout_sec: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            default_version: default_version(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsError::Config(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority:
    /// 1. OSDOCS_CONFIG env var
    /// 2. XDG config file (~/.config/opensearch-docs-mcp/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("OSDOCS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load an explicit config file, still honoring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Upstream configuration
        if let Ok(endpoint) = env::var("OSDOCS_DOCS_ENDPOINT") {
            self.upstream.docs_endpoint = endpoint;
        }
        if let Ok(endpoint) = env::var("OSDOCS_FORUM_ENDPOINT") {
            self.upstream.forum_endpoint = endpoint;
        }
        if let Ok(timeout) = env::var("OSDOCS_REQUEST_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.upstream.request_timeout_sec = t;
            }
        }

        // Cache configuration
        if let Ok(capacity) = env::var("OSDOCS_CACHE_CAPACITY") {
            if let Ok(c) = capacity.parse() {
                self.cache.capacity = c;
            }
        }

        // Search configuration
        if let Ok(limit) = env::var("OSDOCS_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(limit) = env::var("OSDOCS_MAX_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(version) = env::var("OSDOCS_DEFAULT_VERSION") {
            self.search.default_version = version;
        }
        if let Ok(max_query_len) = env::var("OSDOCS_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_endpoint("docs_endpoint", &self.upstream.docs_endpoint)?;
        validate_endpoint("forum_endpoint", &self.upstream.forum_endpoint)?;

        if self.upstream.request_timeout_sec == 0 {
            return Err(DocsError::Config(
                "Request timeout must be non-zero".to_string(),
            ));
        }

        if self.cache.capacity == 0 {
            return Err(DocsError::Config(
                "Cache capacity must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(DocsError::Config(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(DocsError::Config(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.default_version.trim().is_empty() {
            return Err(DocsError::Config(
                "Default version cannot be empty".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocsError::Config(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Docs endpoint: {}", self.upstream.docs_endpoint);
        tracing::info!("  Forum endpoint: {}", self.upstream.forum_endpoint);
        tracing::info!("  Request timeout: {}s", self.upstream.request_timeout_sec);
        tracing::info!("  Cache capacity: {} queries", self.cache.capacity);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Default version: {}", self.search.default_version);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
    }
}

fn validate_endpoint(name: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| DocsError::Config(format!("Invalid {name} '{endpoint}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(DocsError::Config(format!(
            "Invalid {name} '{endpoint}': unsupported scheme '{scheme}'"
        ))),
    }
}
