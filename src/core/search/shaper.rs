//! Result shaping.
//!
//! Maps raw upstream hits into the compact public records returned by
//! the search tools. Shaping is best-effort: malformed hits are skipped
//! with a warning instead of failing the whole request.

use crate::core::types::{
    DocResult, Domain, ForumResult, RawHit, ShapedResult, SNIPPET_MAX_CHARS,
};
use thiserror::Error;
use url::Url;

/// Reason a single hit could not be shaped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("hit {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("hit {index} has url '{url}' outside {prefix}")]
    ForeignUrl {
        index: usize,
        url: String,
        prefix: &'static str,
    },
}

/// Output of a shaping pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedBatch {
    /// Shaped results in upstream order
    pub results: Vec<ShapedResult>,

    /// Hits that were dropped
    pub skipped: Vec<ShapeError>,
}

/// Shape every hit for `domain`, preserving order
pub fn shape(domain: Domain, hits: &[RawHit]) -> ShapedBatch {
    let mut batch = ShapedBatch::default();

    for (index, hit) in hits.iter().enumerate() {
        match shape_hit(domain, index, hit) {
            Ok(result) => batch.results.push(result),
            Err(e) => {
                tracing::warn!(%domain, "Skipping malformed hit: {}", e);
                batch.skipped.push(e);
            }
        }
    }

    batch
}

/// Shape a single hit
pub fn shape_hit(domain: Domain, index: usize, hit: &RawHit) -> Result<ShapedResult, ShapeError> {
    let title = hit
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ShapeError::MissingField {
            index,
            field: "title",
        })?;

    let url = hit
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ShapeError::MissingField {
            index,
            field: "url",
        })?;

    let prefix = domain.url_prefix();
    if !within_prefix(url, prefix) {
        return Err(ShapeError::ForeignUrl {
            index,
            url: url.to_string(),
            prefix,
        });
    }

    let snippet = truncate_chars(&hit.body, SNIPPET_MAX_CHARS);

    let result = match domain {
        Domain::Docs | Domain::Blogs => ShapedResult::Doc(DocResult {
            title: title.to_string(),
            url: url.to_string(),
            snippet,
        }),
        Domain::Forum => ShapedResult::Forum(ForumResult {
            title: title.to_string(),
            url: url.to_string(),
            author: hit.author.clone().unwrap_or_default(),
            snippet,
            created_at: hit.created_at.clone().unwrap_or_default(),
            tags: hit.tags.clone(),
            has_accepted_answer: hit.has_accepted_answer,
        }),
    };

    Ok(result)
}

/// True when `url` starts with `prefix` and parses to the same origin
///
/// The parsed check rejects look-alike hosts such as
/// `https://docs.opensearch.org.example.com/`.
fn within_prefix(url: &str, prefix: &str) -> bool {
    if !url.starts_with(prefix) {
        return false;
    }

    match (Url::parse(url), Url::parse(prefix)) {
        (Ok(url), Ok(prefix)) => {
            url.scheme() == prefix.scheme()
                && url.host_str() == prefix.host_str()
                && url.port_or_known_default() == prefix.port_or_known_default()
                && url.path().starts_with(prefix.path())
        }
        _ => false,
    }
}

/// Keep at most `max_chars` characters of `text`
///
/// Cuts at a character boundary with no ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
