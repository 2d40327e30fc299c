//! Sefaria API client over a pluggable transport.
//!
//! One outbound HTTP request per operation; no retries, no caching. Lookup
//! operations absorb failures (reported through [`ClientHooks`]) and degrade
//! to absent/empty results, matching the read-only, best-effort contract of
//! the library tools.

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::{
    ApiError, Bilingual, CalendarEntry, CalendarQuery, CalendarSnapshot, ClientFuture,
    ClientHooks, CommentaryLink, HttpTransport, NoopClientHooks, SNIPPET_MAX_CHARS, SearchHit,
    SearchRequest, SefariaTransport, TextLibrary, TextVersion, truncate_chars,
};

const OP_FETCH_TEXT: &str = "fetch_text";
const OP_FETCH_COMMENTARY_LINKS: &str = "fetch_commentary_links";
const OP_FETCH_CALENDAR: &str = "fetch_calendar";
const OP_SEARCH_TEXTS: &str = "search_texts";

#[derive(Clone)]
pub struct SefariaClient {
    transport: Arc<dyn SefariaTransport>,
    hooks: Arc<dyn ClientHooks>,
}

impl SefariaClient {
    pub fn new(transport: Arc<dyn SefariaTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopClientHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ClientHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn default_http_transport(client: reqwest::Client) -> HttpTransport {
        HttpTransport::new(client)
    }

    async fn request(
        &self,
        operation: &'static str,
        fut: ClientFuture<'_, Result<Value, ApiError>>,
    ) -> Result<Value, ApiError> {
        self.hooks.on_request_start(operation);
        let started = Instant::now();

        match fut.await {
            Ok(value) => {
                self.hooks.on_request_success(operation, started.elapsed());
                Ok(value)
            }
            Err(error) => {
                self.hooks
                    .on_request_failure(operation, &error, started.elapsed());
                Err(error)
            }
        }
    }

    async fn try_fetch_text(
        &self,
        reference: &str,
        version_filter: Option<&str>,
    ) -> Result<Option<TextVersion>, ApiError> {
        let path = format!("api/v3/texts/{reference}");
        let mut query = Vec::new();
        if let Some(version) = version_filter {
            query.push(("version".to_string(), version.to_string()));
        }

        let value = self
            .request(OP_FETCH_TEXT, self.transport.get_json(&path, &query))
            .await?;
        let TextsPayload { title, versions } = decode(value)?;

        Ok(versions.into_iter().next().map(|version| TextVersion {
            title,
            version_title: version.version_title,
            body: version.text,
        }))
    }

    async fn try_fetch_commentary_links(
        &self,
        reference: &str,
    ) -> Result<Vec<CommentaryLink>, ApiError> {
        let path = format!("api/related/{reference}");
        let value = self
            .request(
                OP_FETCH_COMMENTARY_LINKS,
                self.transport.get_json(&path, &[]),
            )
            .await?;
        let payload: RelatedPayload = decode(value)?;

        Ok(payload
            .links
            .into_iter()
            .filter(|link| link.link_type == "commentary")
            .map(|link| CommentaryLink {
                reference: link.source_he_ref,
            })
            .collect())
    }

    async fn try_fetch_calendar(
        &self,
        query: &CalendarQuery,
    ) -> Result<CalendarSnapshot, ApiError> {
        let pairs = build_calendar_query(query);
        let value = self
            .request(
                OP_FETCH_CALENDAR,
                self.transport.get_json("api/calendars", &pairs),
            )
            .await?;
        let payload: CalendarPayload = decode(value)?;

        Ok(CalendarSnapshot {
            date: payload.date,
            timezone: payload.timezone,
            items: payload
                .calendar_items
                .into_iter()
                .map(CalendarItemPayload::into_entry)
                .collect(),
        })
    }

    async fn try_search_texts(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ApiError> {
        let body = build_search_body(request);
        let value = self
            .request(
                OP_SEARCH_TEXTS,
                self.transport.post_json("api/search-wrapper", body),
            )
            .await?;
        let payload: SearchPayload = decode(value)?;

        Ok(payload
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let snippet = build_snippet(&hit);
                SearchHit {
                    reference: hit.source.reference,
                    hebrew_reference: hit.source.hebrew_reference,
                    snippet,
                }
            })
            .collect())
    }
}

impl TextLibrary for SefariaClient {
    fn fetch_text<'a>(
        &'a self,
        reference: &'a str,
        version_filter: Option<&'a str>,
    ) -> ClientFuture<'a, Option<TextVersion>> {
        Box::pin(async move {
            match self.try_fetch_text(reference, version_filter).await {
                Ok(Some(version)) => Some(version),
                Ok(None) => {
                    self.hooks.on_not_found(OP_FETCH_TEXT, reference);
                    None
                }
                Err(_) => None,
            }
        })
    }

    fn fetch_commentary_links<'a>(
        &'a self,
        reference: &'a str,
    ) -> ClientFuture<'a, Vec<CommentaryLink>> {
        Box::pin(async move {
            self.try_fetch_commentary_links(reference)
                .await
                .unwrap_or_default()
        })
    }

    fn fetch_calendar<'a>(
        &'a self,
        query: CalendarQuery,
    ) -> ClientFuture<'a, Result<CalendarSnapshot, ApiError>> {
        Box::pin(async move { self.try_fetch_calendar(&query).await })
    }

    fn search_texts<'a>(
        &'a self,
        request: SearchRequest,
    ) -> ClientFuture<'a, Result<Vec<SearchHit>, ApiError>> {
        Box::pin(async move { self.try_search_texts(&request).await })
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::malformed(err.to_string()))
}

fn build_calendar_query(query: &CalendarQuery) -> Vec<(String, String)> {
    let mut pairs = vec![(
        "diaspora".to_string(),
        if query.diaspora { "1" } else { "0" }.to_string(),
    )];

    if let Some(custom) = &query.custom {
        pairs.push(("custom".to_string(), custom.clone()));
    }
    if let Some(year) = query.year {
        pairs.push(("year".to_string(), year.to_string()));
    }
    if let Some(month) = query.month {
        pairs.push(("month".to_string(), month.to_string()));
    }
    if let Some(day) = query.day {
        pairs.push(("day".to_string(), day.to_string()));
    }
    if let Some(timezone) = &query.timezone {
        pairs.push(("timezone".to_string(), timezone.clone()));
    }

    pairs
}

fn build_search_body(request: &SearchRequest) -> Value {
    let mut body = json!({
        "query": request.query,
        "type": "text",
        "field": "naive_lemmatizer",
        "size": request.size,
        "source_proj": true,
        "sort_fields": ["pagesheetrank"],
        "sort_method": "score",
        "slop": request.slop,
    });

    if !request.filters.is_empty() {
        body["filters"] = json!(request.filters);
    }

    body
}

/// Prefer highlighted excerpts; non-contiguous spans are joined with an
/// explicit "..." marker. Without highlights, fall back to the raw content
/// field capped at [`SNIPPET_MAX_CHARS`].
fn build_snippet(hit: &SearchHitPayload) -> String {
    if let Some(highlight) = &hit.highlight {
        for spans in highlight.values() {
            let fragments: Vec<&str> = spans
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|fragment| !fragment.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            if !fragments.is_empty() {
                return fragments.join("...");
            }
        }
    }

    truncate_chars(&hit.source.content, SNIPPET_MAX_CHARS)
}

#[derive(Debug, Deserialize)]
struct TextsPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    versions: Vec<VersionPayload>,
}

#[derive(Debug, Deserialize)]
struct VersionPayload {
    #[serde(rename = "versionTitle", default)]
    version_title: Option<String>,
    #[serde(default)]
    text: Value,
}

#[derive(Debug, Deserialize)]
struct RelatedPayload {
    #[serde(default)]
    links: Vec<LinkPayload>,
}

#[derive(Debug, Deserialize)]
struct LinkPayload {
    #[serde(rename = "type", default)]
    link_type: String,
    #[serde(rename = "sourceHeRef", default)]
    source_he_ref: String,
}

#[derive(Debug, Deserialize)]
struct CalendarPayload {
    #[serde(default)]
    date: String,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    calendar_items: Vec<CalendarItemPayload>,
}

#[derive(Debug, Deserialize)]
struct CalendarItemPayload {
    #[serde(default)]
    title: BilingualPayload,
    #[serde(rename = "displayValue", default)]
    display_value: BilingualPayload,
    #[serde(rename = "ref", default)]
    reference: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    order: f64,
    #[serde(default)]
    description: Option<BilingualPayload>,
    #[serde(rename = "extraDetails", default)]
    extra_details: Option<Map<String, Value>>,
}

impl CalendarItemPayload {
    fn into_entry(self) -> CalendarEntry {
        CalendarEntry {
            title: self.title.into_bilingual(),
            display_value: self.display_value.into_bilingual(),
            reference: self.reference,
            category: self.category,
            order: self.order,
            description: self.description.map(BilingualPayload::into_bilingual),
            extra_details: self.extra_details,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct BilingualPayload {
    #[serde(default)]
    en: String,
    #[serde(default)]
    he: String,
}

impl BilingualPayload {
    fn into_bilingual(self) -> Bilingual {
        Bilingual {
            en: self.en,
            he: self.he,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    hits: SearchHitsEnvelope,
}

#[derive(Debug, Default, Deserialize)]
struct SearchHitsEnvelope {
    #[serde(default)]
    hits: Vec<SearchHitPayload>,
}

#[derive(Debug, Deserialize)]
struct SearchHitPayload {
    #[serde(rename = "_source", default)]
    source: SearchSourcePayload,
    #[serde(default)]
    highlight: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchSourcePayload {
    #[serde(rename = "ref", default)]
    reference: String,
    #[serde(rename = "heRef", default)]
    hebrew_reference: String,
    #[serde(default)]
    content: String,
}
