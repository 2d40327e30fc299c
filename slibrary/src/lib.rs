//! Sefaria tool catalog: text lookup, commentaries, search, and the daily
//! learning schedule, exposed as registry-managed tools.

mod format;
mod tools;

pub mod prelude {
    pub use crate::{
        GET_COMMENTARIES, GET_DAILY_LEARNINGS, GET_TEXT, GetCommentariesTool,
        GetDailyLearningsTool, GetTextTool, SEARCH_TEXTS, SearchTextsTool, register_library_tools,
    };
}

pub use format::{
    DESCRIPTION_MAX_CHARS, EXTRA_DETAIL_LIMIT, format_calendar, format_commentaries,
    format_search_results, format_text_result,
};
pub use tools::{
    GET_COMMENTARIES, GET_DAILY_LEARNINGS, GET_TEXT, GetCommentariesTool, GetDailyLearningsTool,
    GetTextTool, SEARCH_TEXTS, SearchTextsTool, register_library_tools,
};
