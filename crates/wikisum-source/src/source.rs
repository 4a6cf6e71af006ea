//! Source trait and error types.

use wikisum_report::Record;

/// How a page is identified in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId<'a> {
    /// Numeric page id (e.g. `16815`).
    Numeric(u64),
    /// Page title (e.g. `New_york_city`).
    Title(&'a str),
}

impl<'a> PageId<'a> {
    /// Classify a request identifier.
    ///
    /// All-digit identifiers are page ids, anything else is a title.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidId`] for an empty identifier or a
    /// numeric one that does not fit in a `u64`.
    pub fn parse(id: &'a str) -> Result<Self, SourceError> {
        if id.is_empty() {
            return Err(SourceError::InvalidId(id.to_owned()));
        }
        if id.bytes().all(|b| b.is_ascii_digit()) {
            return id
                .parse()
                .map(Self::Numeric)
                .map_err(|_| SourceError::InvalidId(id.to_owned()));
        }
        Ok(Self::Title(id))
    }
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// No page with that identifier.
    NotFound,
    /// Identifier cannot name any page.
    InvalidId,
    /// Remote service failed or could not be reached.
    Unavailable,
    /// Anything else.
    Other,
}

/// Error from a record lookup.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Page does not exist.
    #[error("page not found: {0}")]
    NotFound(String),

    /// Identifier is malformed.
    #[error("invalid page identifier: {0:?}")]
    InvalidId(String),

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// API reported an error in an otherwise successful response.
    #[error("API error {code}: {info}")]
    Api {
        /// MediaWiki error code.
        code: String,
        /// Human-readable description.
        info: String,
    },

    /// Response parsed but lacks a required field.
    #[error("malformed response: {0}")]
    Malformed(&'static str),

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Semantic category of this error.
    #[must_use]
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            Self::NotFound(_) => SourceErrorKind::NotFound,
            Self::InvalidId(_) => SourceErrorKind::InvalidId,
            Self::HttpRequest(_) => SourceErrorKind::Unavailable,
            Self::HttpResponse { status, .. } if *status >= 500 || *status == 429 => {
                SourceErrorKind::Unavailable
            }
            Self::HttpResponse { .. }
            | Self::Api { .. }
            | Self::Malformed(_)
            | Self::Json(_)
            | Self::Io(_) => SourceErrorKind::Other,
        }
    }
}

/// Resolves page identifiers to records.
///
/// Implementations are synchronous; async callers should run them on a
/// blocking thread.
pub trait PageSource: Send + Sync {
    /// Look up one page.
    ///
    /// # Arguments
    ///
    /// * `id` - Numeric page id or page title, as taken from the request
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the page does not exist or cannot be
    /// fetched.
    fn fetch(&self, id: &str) -> Result<Record, SourceError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
