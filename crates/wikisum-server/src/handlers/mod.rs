//! HTTP request handlers.

pub(crate) mod pages;
pub(crate) mod quit;

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::NOT_FOUND_BODY;

/// Fallback for unknown routes.
pub(crate) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
