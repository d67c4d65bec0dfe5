// Standalone MCP server binary

use anyhow::Result;
use market_fiyati_mcp::server::McpServer;
use market_fiyati_mcp::tools::product_registry;
use market_fiyati_sdk::MarketFiyatiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("Market Fiyatı MCP Server starting...");

    let client = MarketFiyatiClient::new()?;
    let registry = product_registry(client);

    tracing::info!("Registered {} tools", registry.len());

    // Start MCP server
    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
