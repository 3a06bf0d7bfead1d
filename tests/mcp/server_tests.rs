//! MCP server tests over an in-memory line stream

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, docs_hits, forum_hits, CountingBackend};
    use opensearch_docs_mcp::mcp::protocol::*;
    use opensearch_docs_mcp::mcp::transport::StdioTransport;
    use opensearch_docs_mcp::mcp::McpServer;
    use serde_json::Value;
    use std::sync::Arc;

    fn create_test_server() -> McpServer {
        let backend = Arc::new(CountingBackend::new(docs_hits(3), forum_hits(2)));
        McpServer::new(create_test_services(backend))
    }

    /// Feed `input` through the server and parse every output line
    async fn run_session(input: &str) -> Vec<Value> {
        let server = create_test_server();
        let mut transport = StdioTransport::with_writer(Vec::new());

        server
            .serve(input.as_bytes(), &mut transport)
            .await
            .unwrap();

        String::from_utf8(transport.into_inner())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_full_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"search_docs","arguments":{"query":"install"}}}"#,
            "\n",
        );

        let responses = run_session(input).await;

        // The notification produces no output line
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "opensearch-docs-mcp");
        assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 4);

        let text = responses[2]["result"]["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_malformed_line_returns_parse_error() {
        let responses = run_session("{not json\n").await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["error"]["code"], PARSE_ERROR);
        assert!(responses[0]["id"].is_null());
    }

    #[tokio::test]
    async fn test_blank_lines_skipped() {
        let responses = run_session("\n   \n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n").await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 9);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = create_test_server();

        let response = server
            .process_line(r#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#)
            .await;

        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_notification_ignored() {
        let responses =
            run_session("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/cancelled\"}\n").await;
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn test_error_does_not_stop_session() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"search_docs","arguments":{"query":""}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"search_forum","arguments":{"query":"tls"}}}"#,
            "\n",
        );

        let responses = run_session(input).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], INVALID_PARAMS);
        assert!(responses[1]["result"].is_object());
    }
}
