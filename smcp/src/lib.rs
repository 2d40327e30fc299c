//! MCP server library for sifriya.
//!
//! Exposes the Sefaria tool catalog over the Model Context Protocol.

pub mod server;
