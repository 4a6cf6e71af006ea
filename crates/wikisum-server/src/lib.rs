//! HTTP server for wikisum page summaries.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `GET /page/{id}`: HTML summary of the page with that id or title
//! - `GET /quit`: graceful shutdown, for test harnesses
//!
//! Any failure to resolve a page is answered with `404 Not Found`.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wikisum_server::{ServerConfig, run_server};
//! use wikisum_source::FixtureSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 5000,
//!     };
//!
//!     run_server(config, Arc::new(FixtureSource::builtin())).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (wikisum-server)
//!                      │
//!                      ├─► /page/{id} ──► spawn_blocking ──► PageSource::fetch
//!                      │                                         │
//!                      │        Html ◄── summarize(record) ◄─────┘
//!                      │
//!                      └─► /quit ──► Notify ──► graceful shutdown
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use state::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};
use wikisum_config::{SourceConfig, SourceMode};
use wikisum_source::{FixtureSource, PageSource, SourceError, WikipediaSource};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `source` - Record lookup backend
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    source: Arc<dyn PageSource>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    info!(address = %addr, source = source.name(), "Starting server");

    let listener = TcpListener::bind(addr).await?;
    serve(listener, Arc::new(AppState::new(source))).await?;

    Ok(())
}

/// Serve requests on `listener` until shutdown is requested.
async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let app = app::create_router(Arc::clone(&state));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
}

/// Wait for Ctrl-C or a `/quit` request.
async fn shutdown_signal(state: Arc<AppState>) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => info!("Shutdown signal received, stopping server..."),
        () = state.shutdown.notified() => info!("Quit requested, stopping server..."),
    }
}

/// Create server configuration from wikisum config.
#[must_use]
pub fn server_config_from_config(config: &wikisum_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    }
}

/// Create the record source selected by configuration.
///
/// Fixture mode serves the built-in records plus any from
/// `fixtures_file`; live mode queries the configured API.
///
/// # Errors
///
/// Returns an error if the fixtures file cannot be loaded.
pub fn source_from_config(config: &SourceConfig) -> Result<Arc<dyn PageSource>, SourceError> {
    match config.mode {
        SourceMode::Fixture => {
            let mut source = FixtureSource::builtin();
            if let Some(path) = &config.fixtures_file {
                source = source.with_records_from_file(path)?;
            }
            info!(records = source.len(), "Using fixture records");
            Ok(Arc::new(source))
        }
        SourceMode::Live => {
            info!(api_url = %config.api_url, "Using live API");
            Ok(Arc::new(WikipediaSource::new(
                &config.api_url,
                Duration::from_secs(config.timeout_secs),
            )))
        }
    }
}
