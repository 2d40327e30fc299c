//! Runtime wiring helpers for the library tool server.

use std::sync::Arc;

use crate::{
    ClientHooks, DefaultToolRuntime, NoopClientHooks, SefariaClient, SefariaTransport,
    TextLibrary, ToolRegistry, register_library_tools,
};

#[derive(Clone)]
pub struct LibraryBundle {
    pub client: Arc<SefariaClient>,
    pub registry: Arc<ToolRegistry>,
    pub runtime: DefaultToolRuntime,
}

pub fn build_library(http: reqwest::Client, base_url: impl Into<String>) -> LibraryBundle {
    let transport = Arc::new(
        SefariaClient::default_http_transport(http).with_base_url(base_url),
    );
    build_library_with(transport)
}

pub fn build_library_with(transport: Arc<dyn SefariaTransport>) -> LibraryBundle {
    build_library_with_hooks(transport, Arc::new(NoopClientHooks))
}

pub fn build_library_with_hooks(
    transport: Arc<dyn SefariaTransport>,
    hooks: Arc<dyn ClientHooks>,
) -> LibraryBundle {
    let client = Arc::new(SefariaClient::new(transport).with_hooks(hooks));

    let mut registry = ToolRegistry::new();
    register_library_tools(&mut registry, Arc::clone(&client) as Arc<dyn TextLibrary>);
    let registry = Arc::new(registry);

    let runtime = DefaultToolRuntime::new(Arc::clone(&registry));

    LibraryBundle {
        client,
        registry,
        runtime,
    }
}
