//! The four library tools and their registration helper.
//!
//! Each tool validates its arguments before touching the network, delegates
//! to the [`TextLibrary`] capability set, and renders the result as a single
//! text block. Argument failures surface as `ToolError::invalid_arguments`
//! so the protocol layer can return them as text.

use std::sync::Arc;

use sclient::{CalendarQuery, DEFAULT_RESULT_SIZE, DEFAULT_SLOP, SearchRequest, TextLibrary};
use serde_json::json;
use stooling::{
    Tool, ToolDefinition, ToolError, ToolExecutionContext, ToolFuture, ToolRegistry,
    optional_bool_or, optional_i64, optional_string, optional_string_list, optional_u32_or,
    parse_json_object, required_string,
};

use crate::format::{
    format_calendar, format_commentaries, format_search_results, format_text_result,
};

pub const GET_TEXT: &str = "get_text";
pub const GET_COMMENTARIES: &str = "get_commentaries";
pub const SEARCH_TEXTS: &str = "search_texts";
pub const GET_DAILY_LEARNINGS: &str = "get_daily_learnings";

/// Register the full catalog against one shared library client.
pub fn register_library_tools(registry: &mut ToolRegistry, library: Arc<dyn TextLibrary>) {
    registry.register(GetTextTool::new(Arc::clone(&library)));
    registry.register(GetCommentariesTool::new(Arc::clone(&library)));
    registry.register(SearchTextsTool::new(Arc::clone(&library)));
    registry.register(GetDailyLearningsTool::new(library));
}

pub struct GetTextTool {
    library: Arc<dyn TextLibrary>,
}

impl GetTextTool {
    pub fn new(library: Arc<dyn TextLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for GetTextTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: GET_TEXT.to_string(),
            description: "Get a Jewish text from the library".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "reference": {
                        "type": "string",
                        "description": "The reference of the Jewish text, e.g. 'שולחן ערוך אורח חיים סימן א' or 'Genesis 1:1'",
                    },
                },
                "required": ["reference"],
            })
            .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = parse_json_object(args_json)?;
            let reference = required_string(&args, "reference")?;

            let version = self.library.fetch_text(&reference, None).await;
            Ok(format_text_result(&reference, version.as_ref()))
        })
    }
}

pub struct GetCommentariesTool {
    library: Arc<dyn TextLibrary>,
}

impl GetCommentariesTool {
    pub fn new(library: Arc<dyn TextLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for GetCommentariesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: GET_COMMENTARIES.to_string(),
            description: "Get a list of references of commentaries for a Jewish text".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "reference": {
                        "type": "string",
                        "description": "The reference of the Jewish text, e.g. 'שולחן ערוך אורח חיים סימן א' or 'Genesis 1:1'",
                    },
                },
                "required": ["reference"],
            })
            .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = parse_json_object(args_json)?;
            let reference = required_string(&args, "reference")?;

            let links = self.library.fetch_commentary_links(&reference).await;
            Ok(format_commentaries(&links))
        })
    }
}

pub struct SearchTextsTool {
    library: Arc<dyn TextLibrary>,
}

impl SearchTextsTool {
    pub fn new(library: Arc<dyn TextLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for SearchTextsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: SEARCH_TEXTS.to_string(),
            description: "Search for Jewish texts in the Sefaria library".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query",
                    },
                    "slop": {
                        "type": "integer",
                        "description": "The maximum distance between each query word in the resulting document. 0 means an exact match must be found.",
                        "default": DEFAULT_SLOP,
                    },
                    "filters": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Filters to apply to the text path in English (examples: \"Shulchan Arukh\", \"Maimonides\", \"Talmud\").",
                    },
                    "size": {
                        "type": "integer",
                        "description": "Number of results to return.",
                        "default": DEFAULT_RESULT_SIZE,
                    },
                },
                "required": ["query"],
            })
            .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = parse_json_object(args_json)?;
            let query = required_string(&args, "query")?;
            let request = SearchRequest::new(&query)
                .with_slop(optional_u32_or(&args, "slop", DEFAULT_SLOP))
                .with_size(optional_u32_or(&args, "size", DEFAULT_RESULT_SIZE))
                .with_filters(optional_string_list(&args, "filters"));

            let hits = self
                .library
                .search_texts(request)
                .await
                .map_err(|err| ToolError::execution(err.to_string()))?;
            Ok(format_search_results(&query, &hits))
        })
    }
}

pub struct GetDailyLearningsTool {
    library: Arc<dyn TextLibrary>,
}

impl GetDailyLearningsTool {
    pub fn new(library: Arc<dyn TextLibrary>) -> Self {
        Self { library }
    }
}

impl Tool for GetDailyLearningsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: GET_DAILY_LEARNINGS.to_string(),
            description: "Get the daily or weekly learning schedule from Sefaria's calendar"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "diaspora": {
                        "type": "boolean",
                        "description": "When true, returns the weekly Torah reading for the diaspora. When false, returns the Torah reading for Israel.",
                        "default": true,
                    },
                    "custom": {
                        "type": "string",
                        "description": "If available, the weekly Haftarah will be returned for the selected custom.",
                    },
                    "year": {
                        "type": "integer",
                        "description": "Year for the date. Must be used with month and day, or the API falls back to the current date.",
                    },
                    "month": {
                        "type": "integer",
                        "description": "Month for the date. Must be used with year and day, or the API falls back to the current date.",
                    },
                    "day": {
                        "type": "integer",
                        "description": "Day for the date. Must be used with year and month, or the API falls back to the current date.",
                    },
                    "timezone": {
                        "type": "string",
                        "description": "Timezone name in accordance with IANA standards. Defaults to the client's timezone if not specified.",
                    },
                },
                "required": [],
            })
            .to_string(),
        }
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<String, ToolError>> {
        Box::pin(async move {
            let args = parse_json_object(args_json)?;
            let mut query = CalendarQuery::new()
                .with_diaspora(optional_bool_or(&args, "diaspora", true));

            if let Some(custom) = optional_string(&args, "custom") {
                query = query.with_custom(custom);
            }
            if let Some(year) = optional_i64(&args, "year").and_then(|v| i32::try_from(v).ok()) {
                query = query.with_year(year);
            }
            if let Some(month) = optional_i64(&args, "month").and_then(|v| u32::try_from(v).ok()) {
                query = query.with_month(month);
            }
            if let Some(day) = optional_i64(&args, "day").and_then(|v| u32::try_from(v).ok()) {
                query = query.with_day(day);
            }
            if let Some(timezone) = optional_string(&args, "timezone") {
                query = query.with_timezone(timezone);
            }

            let snapshot = self
                .library
                .fetch_calendar(query)
                .await
                .map_err(|err| ToolError::execution(err.to_string()))?;
            Ok(format_calendar(&snapshot))
        })
    }
}
