//! OpenSearch Docs MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that lets MCP clients search the OpenSearch
//! documentation, blog and community forum.
//!
//! # Examples
//!
//! ```bash
//! # Run with the default config lookup (OSDOCS_CONFIG, then XDG)
//! opensearch-docs-mcp
//!
//! # Explicit config file and JSON logs on stderr
//! RUST_LOG=debug opensearch-docs-mcp --config ./osdocs.toml --log-format json
//! ```

use clap::{Parser, ValueEnum};
use opensearch_docs_mcp::core::config::Config;
use opensearch_docs_mcp::core::services::Services;
use opensearch_docs_mcp::core::xdg::XdgDirs;
use opensearch_docs_mcp::mcp::McpServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// MCP server for OpenSearch docs, blogs and forum search
#[derive(Parser, Debug)]
#[command(name = "opensearch-docs-mcp")]
#[command(version)]
#[command(about = "MCP server for OpenSearch docs, blogs and forum search", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, env = "OSDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format (logs always go to stderr)
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Single-line human-readable logs
    Compact,
    /// One JSON object per line
    Json,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stdout carries JSON-RPC
        .with_env_filter(filter)
        .with_ansi(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.log_format);

    XdgDirs::new().log_paths();

    // Load configuration
    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    // Create services
    let services = Services::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to initialize services: {e}");
        std::process::exit(1);
    });

    // Create and run MCP server
    let server = McpServer::new(Arc::new(services));

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
