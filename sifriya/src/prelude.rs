//! Common imports for most Sifriya applications.

pub use crate::{
    LibraryBundle, build_library, build_library_with, build_library_with_hooks, calendar_query,
    english_text, first_verse, israel_calendar_query, primary_text, search_request,
    weekly_parasha,
};
pub use crate::{
    ApiError, ApiErrorKind, BoxFuture, CalendarQuery, ClientHooks, DefaultToolRuntime,
    HttpTransport, InvocationId, MetricsObservabilityHooks, NoopClientHooks, SearchRequest,
    SefariaClient, SefariaTransport, TextLibrary, Tool, ToolCall, ToolDefinition, ToolError,
    ToolExecutionContext, ToolExecutionResult, ToolRegistry, ToolRuntime,
    TracingObservabilityHooks, register_library_tools,
};
