//! MCP server handler implementation.
//!
//! Implements the rmcp::ServerHandler trait to expose the Sefaria library
//! tools as an MCP server. Tool failures are rendered as text content;
//! every invocation path returns a text result, never a protocol error.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::{Map, Value};

use sifriya::{
    DefaultToolRuntime, ToolCall, ToolDefinition, ToolExecutionContext, ToolRegistry,
    ToolRuntime, ToolRuntimeHooks, TracingObservabilityHooks, build_library_with_hooks,
};

use super::config::ServerConfig;

/// The sifriya MCP server handler.
#[derive(Clone)]
pub struct LibraryServerHandler {
    config: ServerConfig,
    registry: Arc<ToolRegistry>,
    runtime: DefaultToolRuntime,
    hooks: Arc<dyn ToolRuntimeHooks>,
    invocation_counter: Arc<AtomicU64>,
}

impl LibraryServerHandler {
    /// Create a new handler with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let transport = Arc::new(
            sifriya::SefariaClient::default_http_transport(reqwest::Client::new())
                .with_base_url(config.base_url.clone()),
        );
        let bundle =
            build_library_with_hooks(transport, Arc::new(TracingObservabilityHooks));

        Self {
            config,
            registry: bundle.registry,
            runtime: bundle.runtime,
            hooks: Arc::new(TracingObservabilityHooks),
            invocation_counter: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn next_invocation_id(&self) -> String {
        let sequence = self.invocation_counter.fetch_add(1, Ordering::Relaxed);
        format!("call-{sequence}")
    }
}

/// Run one tool call through the runtime and render the outcome as a text
/// result. Failures become `Error: ...` text flagged as errors, matching the
/// original server behavior of never surfacing tool faults to the protocol.
pub async fn dispatch_tool_call(
    runtime: &DefaultToolRuntime,
    hooks: &dyn ToolRuntimeHooks,
    call: ToolCall,
) -> CallToolResult {
    let context = ToolExecutionContext::new(call.id.as_str());
    hooks.on_execution_start(&call, &context);
    let started = Instant::now();

    match runtime.execute(call.clone(), context.clone()).await {
        Ok(result) => {
            hooks.on_execution_success(&call, &context, &result, started.elapsed());
            CallToolResult::success(vec![Content::text(result.output)])
        }
        Err(error) => {
            hooks.on_execution_failure(&call, &context, &error, started.elapsed());
            CallToolResult::error(vec![Content::text(format!("Error: {}", error.message))])
        }
    }
}

fn to_protocol_tool(definition: &ToolDefinition) -> Tool {
    Tool::new(
        definition.name.clone(),
        definition.description.clone(),
        parse_schema(&definition.input_schema),
    )
}

fn parse_schema(schema_json: &str) -> Arc<Map<String, Value>> {
    match serde_json::from_str::<Value>(schema_json) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(Map::new()),
    }
}

impl ServerHandler for LibraryServerHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_instructions(
                "Sifriya — read-only tools over the Sefaria Jewish library.\n\n\
                 Tools:\n\
                 • get_text — Retrieve a passage by reference (Hebrew or English citations)\n\
                 • get_commentaries — List commentary references on a passage\n\
                 • search_texts — Full-text search across the library\n\
                 • get_daily_learnings — Today's (or a given date's) learning schedule",
            )
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self
            .registry
            .definitions()
            .iter()
            .map(to_protocol_tool)
            .collect();

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(Map::new()));

        let call = ToolCall {
            id: self.next_invocation_id(),
            name: request.name.to_string(),
            arguments: arguments.to_string(),
        };

        Ok(dispatch_tool_call(&self.runtime, self.hooks.as_ref(), call).await)
    }
}
