//! HTTP client layer for the Sefaria library API.
//!
//! Request/response translation only: each operation issues one outbound
//! call against a configured base URL and reshapes the JSON reply into the
//! value types consumed by the tool catalog.

mod client;
mod error;
mod hooks;
mod library;
mod model;
mod transport;

pub mod prelude {
    pub use crate::{
        ApiError, ApiErrorKind, Bilingual, CalendarEntry, CalendarQuery, CalendarSnapshot,
        ClientFuture, ClientHooks, CommentaryLink, HttpTransport, NoopClientHooks, SearchHit,
        SearchRequest, SefariaClient, SefariaTransport, TextLibrary, TextVersion,
    };
    pub use scommon::BoxFuture;
}

pub use client::SefariaClient;
pub use error::{ApiError, ApiErrorKind};
pub use hooks::{ClientHooks, NoopClientHooks};
pub use library::{ClientFuture, TextLibrary};
pub use model::{
    Bilingual, CalendarEntry, CalendarQuery, CalendarSnapshot, CommentaryLink,
    DEFAULT_RESULT_SIZE, DEFAULT_SLOP, SNIPPET_MAX_CHARS, SearchHit, SearchRequest, TextVersion,
    truncate_chars,
};
pub use transport::{HttpTransport, SEFARIA_BASE_URL, SefariaTransport};
