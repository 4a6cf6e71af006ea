//! Page summary endpoint.
//!
//! Resolves the identifier from the path to a record and returns the
//! rendered summary document.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use tracing::info;
use wikisum_report::summarize;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /page/{id}.
///
/// `id` is a numeric page id or, for live sources, a page title.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ServerError> {
    info!(id = %id, source = state.source.name(), "Processing page request");

    // Sources are blocking; keep them off the async workers
    let source = Arc::clone(&state.source);
    let record = tokio::task::spawn_blocking(move || source.fetch(&id)).await??;

    Ok(Html(summarize(&record)))
}
