//! smcp: MCP server binary for the sifriya Jewish library.
//!
//! Runs the Sefaria library tools as an MCP server over stdio transport.
//!
//! # Usage
//!
//! ```bash
//! # Run directly against the production API
//! smcp
//!
//! # Point at a local test server
//! SEFARIA_API_URL=http://localhost:8000 smcp
//!
//! # Configure in Claude Code's .mcp.json:
//! # {
//! #   "mcpServers": {
//! #     "sifriya": {
//! #       "command": "smcp"
//! #     }
//! #   }
//! # }
//! ```

use anyhow::{Context, Result};
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use smcp::server::{LibraryServerHandler, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("smcp=info".parse()?))
        .init();

    tracing::info!("Starting sifriya MCP server");

    let config = ServerConfig::from_env();
    tracing::info!(
        "Server config: name={}, version={}, base_url={}",
        config.name,
        config.version,
        config.base_url
    );

    let handler = LibraryServerHandler::new(config);

    tracing::info!("Serving on stdio");

    let service = handler
        .serve(stdio())
        .await
        .context("Failed to start MCP service")?;

    service.waiting().await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
