//! mcp-everything server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use everything_client::{EverythingClient, EverythingConfig};
use everything_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let client = EverythingClient::new(EverythingConfig::try_from(&config)?)?;

    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout_ms,
        default_scope = %config.default_scope,
        "Starting mcp-everything server on stdio transport"
    );

    let handler = handler::McpEverythingServer::new(client);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
