//! Out-of-band shutdown endpoint.

use std::sync::Arc;

use axum::extract::State;
use tracing::info;

use crate::state::AppState;

/// Handle GET /quit.
///
/// Requests a graceful shutdown. In-flight requests, including this one,
/// are completed first.
pub(crate) async fn quit(State(state): State<Arc<AppState>>) -> &'static str {
    info!("Quit requested");
    state.shutdown.notify_one();
    "Shutting down"
}
