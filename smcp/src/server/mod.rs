//! MCP server functionality for sifriya.
//!
//! This module exposes the Sefaria library tools as an MCP server, allowing
//! MCP clients like Claude Code to look up texts, commentaries, search
//! results, and the daily learning schedule.
//!
//! # Example
//!
//! ```ignore
//! use rmcp::service::ServiceExt;
//! use rmcp::transport::io::stdio;
//! use smcp::server::{LibraryServerHandler, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env();
//!     let handler = LibraryServerHandler::new(config);
//!
//!     let service = handler.serve(stdio()).await?;
//!     service.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod handler;

pub use config::ServerConfig;
pub use handler::LibraryServerHandler;
