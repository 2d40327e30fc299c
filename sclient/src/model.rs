//! Request and response value types for the Sefaria API client.
//!
//! ```rust
//! use sclient::{CalendarQuery, SearchRequest};
//!
//! let search = SearchRequest::new("rain blessing").with_size(5);
//! assert_eq!(search.slop, 2);
//! assert_eq!(search.size, 5);
//!
//! let calendar = CalendarQuery::new().with_timezone("Asia/Jerusalem");
//! assert!(calendar.diaspora);
//! ```

use serde_json::{Map, Value};

pub const DEFAULT_SLOP: u32 = 2;
pub const DEFAULT_RESULT_SIZE: u32 = 10;
pub const SNIPPET_MAX_CHARS: usize = 300;

/// One edition of a cited passage, as returned by the texts endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct TextVersion {
    pub title: String,
    pub version_title: Option<String>,
    /// Raw body value: a string for a single segment, nested arrays for a
    /// ranged reference.
    pub body: Value,
}

impl TextVersion {
    /// Flatten the body into a single readable string. Strings pass through,
    /// arrays are joined segment-per-line.
    pub fn body_text(&self) -> String {
        flatten_body(&self.body)
    }
}

fn flatten_body(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_body)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A related-commentary reference for a cited passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryLink {
    pub reference: String,
}

/// English/Hebrew value pair used throughout the calendar payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bilingual {
    pub en: String,
    pub he: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, he: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            he: he.into(),
        }
    }
}

/// One scheduled reading item from the calendar endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub title: Bilingual,
    pub display_value: Bilingual,
    pub reference: Option<String>,
    pub category: Option<String>,
    pub order: f64,
    pub description: Option<Bilingual>,
    /// Extra structured details, e.g. an aliyot subdivision list.
    pub extra_details: Option<Map<String, Value>>,
}

/// The full calendar response for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSnapshot {
    pub date: String,
    pub timezone: String,
    pub items: Vec<CalendarEntry>,
}

/// One matched document from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub reference: String,
    pub hebrew_reference: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Maximum token distance between query words; 0 is an exact match.
    pub slop: u32,
    /// English path filters, e.g. "Shulchan Arukh" or "Talmud".
    pub filters: Vec<String>,
    pub size: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            slop: DEFAULT_SLOP,
            filters: Vec::new(),
            size: DEFAULT_RESULT_SIZE,
        }
    }

    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

/// Parameters for the calendar endpoint. Partial dates are passed through
/// unvalidated; upstream decides how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    pub diaspora: bool,
    pub custom: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub timezone: Option<String>,
}

impl Default for CalendarQuery {
    fn default() -> Self {
        Self {
            diaspora: true,
            custom: None,
            year: None,
            month: None,
            day: None,
            timezone: None,
        }
    }
}

impl CalendarQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diaspora(mut self, diaspora: bool) -> Self {
        self.diaspora = diaspora;
        self
    }

    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    pub fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self.day = Some(day);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Truncate to a maximum character count, appending an ellipsis only when
/// something was cut. Counts characters, not bytes; references and snippets
/// are routinely Hebrew.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let mut output: String = input.chars().take(max_chars).collect();
    output.push_str("...");
    output
}
