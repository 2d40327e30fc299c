use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use sclient::{
    ApiError, CalendarQuery, ClientFuture, ClientHooks, SearchRequest, SefariaClient,
    SefariaTransport, TextLibrary,
};

#[derive(Debug, Clone, PartialEq)]
enum CapturedCall {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Value,
    },
}

#[derive(Debug)]
struct FakeTransport {
    response: Result<Value, ApiError>,
    calls: Mutex<Vec<CapturedCall>>,
}

impl FakeTransport {
    fn replying(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: ApiError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl SefariaTransport for FakeTransport {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> ClientFuture<'a, Result<Value, ApiError>> {
        Box::pin(async move {
            self.calls.lock().expect("calls lock").push(CapturedCall::Get {
                path: path.to_string(),
                query: query.to_vec(),
            });
            self.response.clone()
        })
    }

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: Value,
    ) -> ClientFuture<'a, Result<Value, ApiError>> {
        Box::pin(async move {
            self.calls.lock().expect("calls lock").push(CapturedCall::Post {
                path: path.to_string(),
                body,
            });
            self.response.clone()
        })
    }
}

#[derive(Default)]
struct RecordingHooks {
    events: Mutex<Vec<String>>,
}

impl RecordingHooks {
    fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }
}

impl ClientHooks for RecordingHooks {
    fn on_request_start(&self, operation: &str) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("start:{operation}"));
    }

    fn on_request_success(&self, operation: &str, _elapsed: std::time::Duration) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("success:{operation}"));
    }

    fn on_request_failure(
        &self,
        operation: &str,
        error: &ApiError,
        _elapsed: std::time::Duration,
    ) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("failure:{operation}:{:?}", error.kind));
    }

    fn on_not_found(&self, operation: &str, reference: &str) {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("not_found:{operation}:{reference}"));
    }
}

#[tokio::test]
async fn fetch_text_returns_first_version_and_passes_version_filter() {
    let transport = FakeTransport::replying(json!({
        "title": "Genesis",
        "versions": [
            {"versionTitle": "Tanach with Nikkud", "text": "בְּרֵאשִׁית בָּרָא אֱלֹהִים"},
            {"versionTitle": "Other", "text": "ignored"}
        ]
    }));
    let client = SefariaClient::new(transport.clone());

    let version = client
        .fetch_text("Genesis 1:1", Some("english"))
        .await
        .expect("version should be present");

    assert_eq!(version.title, "Genesis");
    assert_eq!(version.version_title.as_deref(), Some("Tanach with Nikkud"));
    assert_eq!(version.body_text(), "בְּרֵאשִׁית בָּרָא אֱלֹהִים");

    assert_eq!(
        transport.calls(),
        vec![CapturedCall::Get {
            path: "api/v3/texts/Genesis 1:1".to_string(),
            query: vec![("version".to_string(), "english".to_string())],
        }]
    );
}

#[tokio::test]
async fn fetch_text_degrades_to_none_on_empty_versions() {
    let transport = FakeTransport::replying(json!({"title": "Genesis", "versions": []}));
    let hooks = Arc::new(RecordingHooks::default());
    let client = SefariaClient::new(transport).with_hooks(hooks.clone());

    let version = client.fetch_text("Genesis 99:99", None).await;

    assert!(version.is_none());
    assert!(hooks
        .events()
        .contains(&"not_found:fetch_text:Genesis 99:99".to_string()));
}

#[tokio::test]
async fn fetch_text_never_errors_past_its_boundary() {
    let transport = FakeTransport::failing(ApiError::transport("connection refused"));
    let hooks = Arc::new(RecordingHooks::default());
    let client = SefariaClient::new(transport).with_hooks(hooks.clone());

    let version = client.fetch_text("Genesis 1:1", None).await;

    assert!(version.is_none());
    assert_eq!(
        hooks.events(),
        vec![
            "start:fetch_text".to_string(),
            "failure:fetch_text:Transport".to_string(),
        ]
    );
}

#[tokio::test]
async fn commentary_links_keep_only_commentary_typed_links() {
    let transport = FakeTransport::replying(json!({
        "links": [
            {"type": "commentary", "sourceHeRef": "רש\"י על בראשית א:א"},
            {"type": "reference", "sourceHeRef": "ספר אחר"},
            {"type": "commentary", "sourceHeRef": "רמב\"ן על בראשית א:א"},
            {"type": "midrash", "sourceHeRef": "בראשית רבה"}
        ]
    }));
    let client = SefariaClient::new(transport.clone());

    let links = client.fetch_commentary_links("Genesis 1:1").await;

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].reference, "רש\"י על בראשית א:א");
    assert_eq!(links[1].reference, "רמב\"ן על בראשית א:א");
    assert_eq!(
        transport.calls(),
        vec![CapturedCall::Get {
            path: "api/related/Genesis 1:1".to_string(),
            query: Vec::new(),
        }]
    );
}

#[tokio::test]
async fn commentary_links_degrade_to_empty_on_failure() {
    let transport = FakeTransport::failing(ApiError::unavailable("upstream down"));
    let client = SefariaClient::new(transport);

    let links = client.fetch_commentary_links("Genesis 1:1").await;
    assert!(links.is_empty());
}

#[tokio::test]
async fn calendar_snapshot_carries_date_timezone_and_entries() {
    let transport = FakeTransport::replying(json!({
        "date": "2025-10-14",
        "timezone": "America/New_York",
        "calendar_items": [
            {
                "title": {"en": "Parashat Hashavua", "he": "פרשת השבוע"},
                "displayValue": {"en": "Vezot Haberakhah", "he": "וזאת הברכה"},
                "ref": "Deuteronomy 33:1-34:12",
                "category": "Tanakh",
                "order": 1,
                "description": {"en": "The final parasha.", "he": "הפרשה האחרונה."},
                "extraDetails": {"aliyot": ["Deuteronomy 33:1-7", "Deuteronomy 33:8-12"]}
            },
            {
                "title": {"en": "Daf Yomi", "he": "דף יומי"},
                "displayValue": {"en": "Avodah Zarah 47", "he": "עבודה זרה מז"},
                "ref": "Avodah Zarah 47",
                "category": "Talmud",
                "order": 3
            }
        ]
    }));
    let client = SefariaClient::new(transport);

    let snapshot = client
        .fetch_calendar(CalendarQuery::new())
        .await
        .expect("calendar should parse");

    assert_eq!(snapshot.date, "2025-10-14");
    assert_eq!(snapshot.timezone, "America/New_York");
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.items[0].title.en, "Parashat Hashavua");
    assert_eq!(
        snapshot.items[0].reference.as_deref(),
        Some("Deuteronomy 33:1-34:12")
    );
    assert!(snapshot.items[0].extra_details.is_some());
    assert!(snapshot.items[1].description.is_none());
}

#[tokio::test]
async fn calendar_failure_surfaces_the_error() {
    let transport = FakeTransport::failing(ApiError::timeout("slow upstream"));
    let client = SefariaClient::new(transport);

    let error = client
        .fetch_calendar(CalendarQuery::new())
        .await
        .expect_err("calendar should fail");
    assert!(error.retryable);
}

#[tokio::test]
async fn search_posts_fixed_template_merged_with_caller_values() {
    let transport = FakeTransport::replying(json!({"hits": {"hits": []}}));
    let client = SefariaClient::new(transport.clone());

    let hits = client
        .search_texts(
            SearchRequest::new("גזל גוי")
                .with_slop(4)
                .with_size(25)
                .with_filter("Talmud"),
        )
        .await
        .expect("search should succeed");
    assert!(hits.is_empty());

    let calls = transport.calls();
    let CapturedCall::Post { path, body } = &calls[0] else {
        panic!("expected a POST call");
    };
    assert_eq!(path, "api/search-wrapper");
    assert_eq!(body["query"], "גזל גוי");
    assert_eq!(body["type"], "text");
    assert_eq!(body["field"], "naive_lemmatizer");
    assert_eq!(body["slop"], 4);
    assert_eq!(body["size"], 25);
    assert_eq!(body["source_proj"], true);
    assert_eq!(body["sort_fields"], json!(["pagesheetrank"]));
    assert_eq!(body["sort_method"], "score");
    assert_eq!(body["filters"], json!(["Talmud"]));
}

#[tokio::test]
async fn search_maps_hits_preferring_highlights() {
    let transport = FakeTransport::replying(json!({
        "hits": {
            "hits": [
                {
                    "_source": {"ref": "Bava Kamma 113a", "heRef": "בבא קמא קיג א", "content": "raw"},
                    "highlight": {"naive_lemmatizer": ["span one", "span two"]}
                },
                {
                    "_source": {"ref": "Bava Metzia 24a", "heRef": "בבא מציעא כד א", "content": "fallback content"}
                }
            ]
        }
    }));
    let client = SefariaClient::new(transport);

    let hits = client
        .search_texts(SearchRequest::new("גזל"))
        .await
        .expect("search should succeed");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].reference, "Bava Kamma 113a");
    assert_eq!(hits[0].hebrew_reference, "בבא קמא קיג א");
    assert_eq!(hits[0].snippet, "span one...span two");
    assert_eq!(hits[1].snippet, "fallback content");
}

#[tokio::test]
async fn search_reports_malformed_payload_as_error() {
    let transport = FakeTransport::replying(json!({"hits": "not-an-envelope"}));
    let client = SefariaClient::new(transport);

    let error = client
        .search_texts(SearchRequest::new("גזל"))
        .await
        .expect_err("malformed payload should fail");
    assert_eq!(error.kind, sclient::ApiErrorKind::Malformed);
}
