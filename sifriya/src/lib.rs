//! Unified facade over the Sifriya workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core sifriya crates and provides convenience utilities
//! for wiring the Sefaria client, the tool catalog, and the tool runtime
//! together.

pub mod prelude;
pub mod runtime;
pub mod util;

pub use sclient;
pub use scommon;
pub use slibrary;
pub use sobserve;
pub use stooling;

pub use sclient::{
    ApiError, ApiErrorKind, Bilingual, CalendarEntry, CalendarQuery, CalendarSnapshot,
    ClientFuture, ClientHooks, CommentaryLink, HttpTransport, NoopClientHooks, SEFARIA_BASE_URL,
    SearchHit, SearchRequest, SefariaClient, SefariaTransport, TextLibrary, TextVersion,
    truncate_chars,
};
pub use scommon::{BoxFuture, InvocationId, MetadataMap, TraceId};
pub use slibrary::{
    GET_COMMENTARIES, GET_DAILY_LEARNINGS, GET_TEXT, GetCommentariesTool, GetDailyLearningsTool,
    GetTextTool, SEARCH_TEXTS, SearchTextsTool, format_calendar, format_commentaries,
    format_search_results, format_text_result, register_library_tools,
};
pub use sobserve::{MetricsObservabilityHooks, TracingObservabilityHooks};
pub use stooling::{
    DefaultToolRuntime, FunctionTool, NoopToolRuntimeHooks, Tool, ToolCall, ToolDefinition,
    ToolError, ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture, ToolRegistry,
    ToolRuntime, ToolRuntimeHooks, parse_json_object, parse_json_value, required_string,
};

pub use runtime::{LibraryBundle, build_library, build_library_with, build_library_with_hooks};
pub use util::{
    PARASHA_TITLE, ParashaInfo, calendar_query, english_text, first_verse, israel_calendar_query,
    primary_text, search_request, weekly_parasha,
};
