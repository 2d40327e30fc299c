//! Configuration for the sifriya MCP server.
//!
//! The upstream base URL is the only environment-driven setting; everything
//! else comes from crate metadata.

use sifriya::SEFARIA_BASE_URL;

/// Environment variable overriding the upstream Sefaria host, e.g. a local
/// test server at `http://localhost:8000`.
pub const BASE_URL_ENV: &str = "SEFARIA_API_URL";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name (shown to MCP clients).
    pub name: String,

    /// Server version.
    pub version: String,

    /// Base URL of the upstream Sefaria API.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "sifriya".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_url: SEFARIA_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment, falling back to the
    /// production host when `SEFARIA_API_URL` is unset or blank.
    pub fn from_env() -> Self {
        Self {
            base_url: resolve_base_url(std::env::var(BASE_URL_ENV).ok()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn resolve_base_url(value: Option<String>) -> String {
    value
        .filter(|candidate| !candidate.trim().is_empty())
        .unwrap_or_else(|| SEFARIA_BASE_URL.to_string())
}
