//! The text-library capability set consumed by the tool catalog.

use std::future::Future;
use std::pin::Pin;

use crate::{
    ApiError, CalendarQuery, CalendarSnapshot, CommentaryLink, SearchHit, SearchRequest,
    TextVersion,
};

pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The four read-only operations the tool catalog depends on.
///
/// `fetch_text` and `fetch_commentary_links` absorb their own failures and
/// degrade to absent/empty results; `fetch_calendar` and `search_texts`
/// surface errors for the caller to render.
pub trait TextLibrary: Send + Sync {
    fn fetch_text<'a>(
        &'a self,
        reference: &'a str,
        version_filter: Option<&'a str>,
    ) -> ClientFuture<'a, Option<TextVersion>>;

    fn fetch_commentary_links<'a>(
        &'a self,
        reference: &'a str,
    ) -> ClientFuture<'a, Vec<CommentaryLink>>;

    fn fetch_calendar<'a>(
        &'a self,
        query: CalendarQuery,
    ) -> ClientFuture<'a, Result<CalendarSnapshot, ApiError>>;

    fn search_texts<'a>(
        &'a self,
        request: SearchRequest,
    ) -> ClientFuture<'a, Result<Vec<SearchHit>, ApiError>>;
}
