//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use tokio::sync::Notify;
use wikisum_source::PageSource;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Record lookup backend.
    pub(crate) source: Arc<dyn PageSource>,
    /// Signalled by `/quit` to stop the server.
    pub(crate) shutdown: Notify,
}

impl AppState {
    pub(crate) fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            shutdown: Notify::new(),
        }
    }
}
