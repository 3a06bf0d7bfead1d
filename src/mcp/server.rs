//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server on stdin/stdout until EOF or Ctrl+C
    pub async fn run(&self) -> Result<(), McpError> {
        info!("Starting OpenSearch docs MCP server");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut transport = StdioTransport::new();

        tokio::select! {
            result = self.serve(stdin, &mut transport) => result?,
            _ = tokio::signal::ctrl_c() => info!("Received shutdown signal"),
        }

        info!("MCP server shutting down");
        Ok(())
    }

    /// Process line-delimited requests from `input` until EOF
    pub async fn serve<R, W>(
        &self,
        input: R,
        transport: &mut StdioTransport<W>,
    ) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.process_line(&line).await;
            transport.send_response(response).await?;
        }

        Ok(())
    }

    /// Turn one raw request line into a response, never failing
    pub async fn process_line(&self, line: &str) -> JsonRpcResponse {
        debug!("Received: {}", line);

        match self.process_message(line).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.to_rpc_error();
                JsonRpcResponse::error(None, code, message)
            }
        }
    }

    async fn process_message(&self, line: &str) -> Result<JsonRpcResponse, McpError> {
        // Parse JSON-RPC request
        let request: JsonRpcRequest =
            serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

        // Route to handler
        match request.method.as_str() {
            "initialize" => self.handlers.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                self.handlers.handle_initialized(request).await
            }
            "tools/list" => self.handlers.handle_tools_list(request).await,
            "tools/call" => self.handlers.handle_tools_call(request).await,
            "ping" => self.handlers.handle_ping(request).await,
            _ if request.id.is_none() => {
                debug!("Ignoring notification: {}", request.method);
                Ok(JsonRpcResponse::none())
            }
            _ => Ok(JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }
}
