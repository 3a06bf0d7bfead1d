//! End-to-end search pipeline tests (fetch, shape, paginate)

use crate::common::{create_test_services, doc_hit, docs_hits, forum_hits, CountingBackend};
use opensearch_docs_mcp::core::error::DocsError;
use opensearch_docs_mcp::core::types::{RawHit, SearchRequest, ShapedResult};
use std::sync::Arc;

fn backend(docs: Vec<RawHit>, forum: Vec<RawHit>) -> Arc<CountingBackend> {
    Arc::new(CountingBackend::new(docs, forum))
}

#[tokio::test]
async fn test_install_limit_5_over_5_hits() {
    let services = create_test_services(backend(docs_hits(5), vec![]));

    let envelope = services
        .search
        .search_docs(SearchRequest::new("install").with_limit(5))
        .await
        .unwrap();

    assert_eq!(envelope.limit, 5);
    assert_eq!(envelope.offset, 0);
    assert_eq!(envelope.total, 5);
    assert!(!envelope.has_more);
    assert_eq!(envelope.results.len(), 5);
    for result in &envelope.results {
        assert!(result.url().starts_with("https://docs.opensearch.org"));
    }
}

#[tokio::test]
async fn test_consecutive_pages_differ() {
    let backend = backend(docs_hits(6), vec![]);
    let services = create_test_services(backend.clone());

    let first = services
        .search
        .search_docs(SearchRequest::new("index").with_limit(2).with_offset(0))
        .await
        .unwrap();
    let second = services
        .search
        .search_docs(SearchRequest::new("index").with_limit(2).with_offset(2))
        .await
        .unwrap();

    assert_ne!(first.results[0].url(), second.results[0].url());
    assert!(first.has_more);
    assert!(second.has_more);

    // Both pages come from one upstream fetch
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_repeated_call_identical_and_counts_one_hit() {
    let services = create_test_services(backend(docs_hits(4), vec![]));
    let request = SearchRequest::new("snapshot").with_version("2.19");

    let first = services.search.search_docs(request.clone()).await.unwrap();
    let second = services.search.search_docs(request).await.unwrap();

    assert_eq!(first, second);
    let stats = services.cache.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn test_single_page_response_size_bound() {
    let services = create_test_services(backend(docs_hits(20), forum_hits(20)));

    let docs = services
        .search
        .search_docs(SearchRequest::new("cluster").with_limit(10))
        .await
        .unwrap();
    let forum = services
        .search
        .search_forum(SearchRequest::new("cluster").with_limit(10))
        .await
        .unwrap();

    assert!(serde_json::to_string(&docs).unwrap().len() < 10_000);
    assert!(serde_json::to_string(&forum).unwrap().len() < 10_000);
}

#[tokio::test]
async fn test_snippets_capped_at_300() {
    let services = create_test_services(backend(docs_hits(3), vec![]));

    let envelope = services
        .search
        .search_blogs(SearchRequest::new("release"))
        .await
        .unwrap();

    for result in &envelope.results {
        assert_eq!(result.snippet().chars().count(), 300);
    }
}

#[tokio::test]
async fn test_empty_upstream_result() {
    let services = create_test_services(backend(vec![], vec![]));

    let envelope = services
        .search
        .search_docs(SearchRequest::new("nothing matches this"))
        .await
        .unwrap();

    assert_eq!(envelope.total, 0);
    assert!(envelope.results.is_empty());
    assert!(!envelope.has_more);
}

#[tokio::test]
async fn test_offset_past_end() {
    let services = create_test_services(backend(docs_hits(3), vec![]));

    let envelope = services
        .search
        .search_docs(SearchRequest::new("index").with_offset(10))
        .await
        .unwrap();

    assert_eq!(envelope.total, 3);
    assert_eq!(envelope.offset, 10);
    assert!(envelope.results.is_empty());
    assert!(!envelope.has_more);
}

#[tokio::test]
async fn test_malformed_hits_are_skipped() {
    let docs = vec![
        doc_hit("Good", "/docs/latest/good/", "body"),
        RawHit {
            title: None,
            url: Some("https://docs.opensearch.org/docs/latest/untitled/".to_string()),
            ..RawHit::default()
        },
        RawHit {
            title: Some("Elsewhere".to_string()),
            url: Some("https://example.com/page".to_string()),
            ..RawHit::default()
        },
    ];
    let services = create_test_services(backend(docs, vec![]));

    let envelope = services
        .search
        .search_docs(SearchRequest::new("good"))
        .await
        .unwrap();

    assert_eq!(envelope.total, 1);
    assert_eq!(envelope.results[0].title(), "Good");
}

#[tokio::test]
async fn test_look_alike_host_is_skipped() {
    let docs = vec![
        doc_hit("Real", "/docs/latest/real/", "body"),
        RawHit {
            title: Some("Look-alike".to_string()),
            url: Some("https://docs.opensearch.org.evil.example/docs/".to_string()),
            body: "phish".to_string(),
            ..RawHit::default()
        },
    ];
    let services = create_test_services(backend(docs, vec![]));

    let envelope = services
        .search
        .search_docs(SearchRequest::new("real"))
        .await
        .unwrap();

    assert_eq!(envelope.total, 1);
    assert_eq!(envelope.results[0].title(), "Real");
}

#[tokio::test]
async fn test_forum_results_carry_thread_fields() {
    let services = create_test_services(backend(vec![], forum_hits(3)));

    let envelope = services
        .search
        .search_forum(SearchRequest::new("security plugin"))
        .await
        .unwrap();

    assert!(envelope.version.is_none());
    assert_eq!(envelope.total, 3);
    match &envelope.results[0] {
        ShapedResult::Forum(thread) => {
            assert_eq!(thread.url, "https://forum.opensearch.org/t/thread-0/1000");
            assert_eq!(thread.author, "jdoe");
            assert_eq!(thread.tags, vec!["security", "help"]);
            assert!(thread.has_accepted_answer);
        }
        other => panic!("expected forum result, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_parameters_rejected_before_fetch() {
    let backend = backend(docs_hits(3), vec![]);
    let services = create_test_services(backend.clone());

    let cases = [
        SearchRequest::new(""),
        SearchRequest::new("   "),
        SearchRequest::new("q").with_limit(0),
        SearchRequest::new("q").with_limit(51),
        SearchRequest::new("q").with_offset(-1),
        SearchRequest::new("x".repeat(501)),
    ];

    for request in cases {
        let result = services.search.search_docs(request).await;
        assert!(matches!(result, Err(DocsError::InvalidParameter(_))));
    }
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let backend = backend(docs_hits(3), vec![]);
    backend.set_failing(true);
    let services = create_test_services(backend);

    let result = services.search.search_docs(SearchRequest::new("q")).await;
    assert!(matches!(result, Err(DocsError::Upstream(_))));
}

#[tokio::test]
async fn test_clear_resets_cache() {
    let backend = backend(docs_hits(2), vec![]);
    let services = create_test_services(backend.clone());

    services.search.search_docs(SearchRequest::new("q")).await.unwrap();
    services.cache.clear().await;
    services.search.search_docs(SearchRequest::new("q")).await.unwrap();

    let stats = services.cache.stats().await;
    assert_eq!(backend.calls(), 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 0);
}
