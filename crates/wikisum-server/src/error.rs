//! Server error type.
//!
//! Every failure to produce a summary is reported to the client as
//! `404 Not Found`; the cause only reaches the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::task::JoinError;
use tracing::{error, warn};
use wikisum_source::SourceError;

/// Body of every error response.
pub(crate) const NOT_FOUND_BODY: &str = "404 Not Found";

/// Error while handling a page request.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Record lookup failed.
    #[error("page lookup failed: {0}")]
    Lookup(#[from] SourceError),

    /// Blocking lookup task panicked or was cancelled.
    #[error("lookup task failed: {0}")]
    Task(#[from] JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::Lookup(err) => warn!(kind = ?err.kind(), error = %err, "Lookup failed"),
            Self::Task(err) => error!(error = %err, "Lookup task failed"),
        }
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_is_404() {
        let response = ServerError::from(SourceError::NotFound("0".to_owned())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_failure_is_404() {
        let err = SourceError::HttpResponse {
            status: 503,
            body: "maintenance".to_owned(),
        };

        let response = ServerError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
