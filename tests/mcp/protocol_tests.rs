//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use opensearch_docs_mcp::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {
                    "name": "test",
                    "version": "1.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "initialize");
        assert!(req.id.is_some());

        let params: InitializeParams = serde_json::from_value(req.params.unwrap()).unwrap();
        assert_eq!(params.protocol_version.as_deref(), Some("2024-11-05"));
        assert_eq!(params.client_info.unwrap().name, "test");
    }

    #[test]
    fn test_parse_notification_without_id() {
        let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(req.id.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_parse_tools_call_params() {
        let params: ToolCallParams = serde_json::from_value(json!({
            "name": "search_forum",
            "arguments": {"query": "cluster red", "limit": 3}
        }))
        .unwrap();

        assert_eq!(params.name, "search_forum");
        assert_eq!(params.arguments["limit"], 3);
    }

    #[test]
    fn test_tools_call_params_default_arguments() {
        let params: ToolCallParams =
            serde_json::from_value(json!({"name": "get_server_info"})).unwrap();
        assert!(params.arguments.is_null());
    }

    #[test]
    fn test_serialize_initialize_response() {
        let response = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "opensearch-docs-mcp".to_string(),
                version: "0.3.2".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["protocolVersion"], "2024-11-05");
        assert_eq!(json["serverInfo"]["name"], "opensearch-docs-mcp");
        assert_eq!(json["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn test_serialize_tool_schema_camel_case() {
        let schema = ToolSchema {
            name: "search_docs".to_string(),
            description: "Search docs".to_string(),
            input_schema: json!({"type": "object"}),
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["inputSchema"]["type"], "object");
        assert!(json.get("input_schema").is_none());
    }

    #[test]
    fn test_serialize_text_content_block() {
        let result = ToolResult {
            content: vec![ContentBlock::Text {
                text: "hello".to_string(),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({"content": [{"type": "text", "text": "hello"}]}));
    }

    #[test]
    fn test_json_rpc_response_with_result() {
        let response = JsonRpcResponse::success(Some(json!(1)), json!({"status": "ok"}));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_json_rpc_response_with_error() {
        let response =
            JsonRpcResponse::error(Some(json!(1)), UPSTREAM_FAILED, "Upstream".to_string());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":-32001"));
        assert!(!json.contains("\"result\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PARSE_ERROR, -32700);
        assert_eq!(INVALID_REQUEST, -32600);
        assert_eq!(METHOD_NOT_FOUND, -32601);
        assert_eq!(INVALID_PARAMS, -32602);
        assert_eq!(INTERNAL_ERROR, -32603);
        assert_ne!(UPSTREAM_FAILED, INTERNAL_ERROR);
    }
}
