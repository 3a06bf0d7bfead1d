//! Upstream search client.
//!
//! Queries the remote search endpoints and normalizes their payloads
//! into [`RawHit`] lists. Documentation and blog posts come from the
//! OpenSearch website search API; forum threads come from the
//! Discourse `search.json` endpoint.

use crate::core::config::UpstreamConfig;
use crate::core::error::{DocsError, Result};
use crate::core::types::{Domain, RawHit, SearchKey, DOCS_URL_PREFIX, FORUM_URL_PREFIX};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Source of raw search hits
///
/// Implemented over HTTP in production and by stubs in tests.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch the ordered hit list for `key`
    ///
    /// An empty result set is `Ok(vec![])`, never an error.
    async fn fetch(&self, key: &SearchKey) -> Result<Vec<RawHit>>;
}

/// HTTP client for the OpenSearch website and forum search APIs
pub struct HttpSearchBackend {
    client: reqwest::Client,
    docs_endpoint: Url,
    forum_endpoint: Url,
}

impl HttpSearchBackend {
    /// Build a client from upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_sec))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DocsError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            docs_endpoint: parse_endpoint(&config.docs_endpoint)?,
            forum_endpoint: parse_endpoint(&config.forum_endpoint)?,
        })
    }

    /// Build the request URL for a search key
    pub fn request_url(&self, key: &SearchKey) -> Url {
        match key.domain {
            Domain::Docs | Domain::Blogs => {
                let mut url = self.docs_endpoint.clone();
                url.query_pairs_mut()
                    .append_pair("q", &key.query)
                    .append_pair("v", &key.version)
                    .append_pair("c", key.domain.as_str());
                url
            }
            Domain::Forum => {
                let mut url = self.forum_endpoint.clone();
                url.query_pairs_mut().append_pair("q", &key.query);
                url
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocsError::Upstream(format!(
                "{} returned HTTP {status}",
                url.path()
            )));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            DocsError::Upstream(format!("malformed response from {}: {e}", url.path()))
        })
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn fetch(&self, key: &SearchKey) -> Result<Vec<RawHit>> {
        let url = self.request_url(key);
        tracing::debug!(domain = %key.domain, %url, "Querying upstream");

        let result = match key.domain {
            Domain::Docs | Domain::Blogs => self
                .get_json::<DocsSearchResponse>(url)
                .await
                .map(DocsSearchResponse::into_hits),
            Domain::Forum => self
                .get_json::<ForumSearchResponse>(url)
                .await
                .map(ForumSearchResponse::into_hits),
        };

        match &result {
            Ok(hits) => tracing::debug!(domain = %key.domain, hits = hits.len(), "Upstream returned"),
            Err(e) => tracing::warn!(domain = %key.domain, query = %key.query, "Upstream failed: {}", e),
        }

        result
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| DocsError::Config(format!("Invalid endpoint '{endpoint}': {e}")))
}

/// Website search API payload
///
/// Elements stay untyped until [`into_hits`](Self::into_hits) so one
/// malformed hit cannot fail the whole response.
#[derive(Debug, Deserialize)]
pub struct DocsSearchResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct DocsHit {
    title: Option<String>,
    url: Option<String>,
    content: Option<String>,
    summary: Option<String>,
}

impl DocsSearchResponse {
    pub fn into_hits(self) -> Vec<RawHit> {
        decode_elements::<DocsHit>("result", self.results.unwrap_or_default())
            .into_iter()
            .map(|hit| RawHit {
                title: hit.title,
                url: hit.url.map(|u| resolve_docs_url(&u)),
                body: hit.content.or(hit.summary).unwrap_or_default(),
                ..RawHit::default()
            })
            .collect()
    }
}

/// Resolve a site-relative documentation path to an absolute URL
pub fn resolve_docs_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{DOCS_URL_PREFIX}{url}")
    } else {
        format!("{DOCS_URL_PREFIX}/{url}")
    }
}

/// Discourse `search.json` payload
#[derive(Debug, Deserialize)]
pub struct ForumSearchResponse {
    #[serde(default)]
    posts: Option<Vec<Value>>,
    #[serde(default)]
    topics: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ForumPost {
    topic_id: u64,
    username: Option<String>,
    blurb: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForumTopic {
    id: u64,
    slug: Option<String>,
    title: Option<String>,
    created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<ForumTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    has_accepted_answer: bool,
}

/// Older Discourse versions send tag names, newer ones send objects
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ForumTag {
    Name(String),
    Object { name: String },
}

impl ForumTag {
    fn into_name(self) -> String {
        match self {
            ForumTag::Name(name) | ForumTag::Object { name } => name,
        }
    }
}

impl ForumSearchResponse {
    /// One hit per topic, in topic order, joined with its first post
    pub fn into_hits(self) -> Vec<RawHit> {
        let posts = decode_elements::<ForumPost>("post", self.posts.unwrap_or_default());
        let mut first_post: HashMap<u64, &ForumPost> = HashMap::new();
        for post in &posts {
            first_post.entry(post.topic_id).or_insert(post);
        }

        decode_elements::<ForumTopic>("topic", self.topics.unwrap_or_default())
            .into_iter()
            .map(|topic| {
                let post = first_post.get(&topic.id);
                RawHit {
                    url: Some(forum_topic_url(topic.slug.as_deref(), topic.id)),
                    title: topic.title,
                    body: post.and_then(|p| p.blurb.clone()).unwrap_or_default(),
                    author: post.and_then(|p| p.username.clone()),
                    created_at: topic.created_at,
                    tags: topic.tags.into_iter().map(ForumTag::into_name).collect(),
                    has_accepted_answer: topic.has_accepted_answer,
                }
            })
            .collect()
    }
}

/// Decode each element on its own, dropping the ones that do not fit `T`
fn decode_elements<T: DeserializeOwned>(kind: &str, elements: Vec<Value>) -> Vec<T> {
    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(index, "Skipping malformed upstream {kind}: {e}");
                None
            }
        })
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Public URL of a forum topic
pub fn forum_topic_url(slug: Option<&str>, id: u64) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => format!("{FORUM_URL_PREFIX}{slug}/{id}"),
        _ => format!("{FORUM_URL_PREFIX}{id}"),
    }
}
