//! Small convenience helpers over the library client.

use crate::{CalendarQuery, SearchRequest, TextLibrary, TextVersion};

/// Calendar title identifying the weekly Torah portion entry.
pub const PARASHA_TITLE: &str = "Parashat Hashavua";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParashaInfo {
    pub reference: String,
    pub name: String,
}

/// Look up the current weekly parasha from the calendar.
pub async fn weekly_parasha(library: &dyn TextLibrary) -> Option<ParashaInfo> {
    let snapshot = library.fetch_calendar(CalendarQuery::new()).await.ok()?;

    snapshot
        .items
        .into_iter()
        .find(|item| item.title.en == PARASHA_TITLE)
        .and_then(|item| {
            Some(ParashaInfo {
                reference: item.reference?,
                name: item.display_value.en,
            })
        })
}

/// The start of a ranged reference, e.g. "Genesis 18:1" for
/// "Genesis 18:1-22:24".
pub fn first_verse(reference: &str) -> &str {
    reference.split('-').next().unwrap_or(reference)
}

pub async fn primary_text(library: &dyn TextLibrary, reference: &str) -> Option<TextVersion> {
    library.fetch_text(reference, None).await
}

pub async fn english_text(library: &dyn TextLibrary, reference: &str) -> Option<TextVersion> {
    library.fetch_text(reference, Some("english")).await
}

pub fn search_request(query: impl Into<String>) -> SearchRequest {
    SearchRequest::new(query)
}

pub fn calendar_query() -> CalendarQuery {
    CalendarQuery::new()
}

pub fn israel_calendar_query() -> CalendarQuery {
    CalendarQuery::new().with_diaspora(false)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::{ApiError, ClientFuture, SefariaClient, SefariaTransport};

    use super::{first_verse, israel_calendar_query, weekly_parasha};

    #[derive(Debug)]
    struct CalendarOnlyTransport;

    impl SefariaTransport for CalendarOnlyTransport {
        fn get_json<'a>(
            &'a self,
            path: &'a str,
            _query: &'a [(String, String)],
        ) -> ClientFuture<'a, Result<serde_json::Value, ApiError>> {
            Box::pin(async move {
                if path != "api/calendars" {
                    return Err(ApiError::not_found(format!("unexpected path {path}")));
                }
                Ok(json!({
                    "date": "2025-10-14",
                    "timezone": "UTC",
                    "calendar_items": [
                        {
                            "title": {"en": "Daf Yomi", "he": "דף יומי"},
                            "displayValue": {"en": "Avodah Zarah 47", "he": ""},
                            "ref": "Avodah Zarah 47",
                            "order": 3
                        },
                        {
                            "title": {"en": "Parashat Hashavua", "he": "פרשת השבוע"},
                            "displayValue": {"en": "Vezot Haberakhah", "he": "וזאת הברכה"},
                            "ref": "Deuteronomy 33:1-34:12",
                            "order": 1
                        }
                    ]
                }))
            })
        }

        fn post_json<'a>(
            &'a self,
            _path: &'a str,
            _body: serde_json::Value,
        ) -> ClientFuture<'a, Result<serde_json::Value, ApiError>> {
            Box::pin(async move { Err(ApiError::other("unused")) })
        }
    }

    #[test]
    fn first_verse_takes_the_range_start() {
        assert_eq!(first_verse("Genesis 18:1-22:24"), "Genesis 18:1");
        assert_eq!(first_verse("Genesis 1:1"), "Genesis 1:1");
    }

    #[test]
    fn israel_calendar_query_disables_diaspora() {
        assert!(!israel_calendar_query().diaspora);
    }

    #[tokio::test]
    async fn weekly_parasha_finds_the_parasha_entry() {
        let client = SefariaClient::new(Arc::new(CalendarOnlyTransport));

        let parasha = weekly_parasha(&client).await.expect("parasha should exist");
        assert_eq!(parasha.reference, "Deuteronomy 33:1-34:12");
        assert_eq!(parasha.name, "Vezot Haberakhah");
    }
}
