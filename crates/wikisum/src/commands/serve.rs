//! `wikisum serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use wikisum_config::{CliSettings, Config, SourceMode};
use wikisum_server::{run_server, server_config_from_config, source_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover wikisum.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "WIKISUM_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "WIKISUM_PORT")]
    port: Option<u16>,

    /// Serve canned records instead of querying Wikipedia.
    #[arg(short = 't', long = "test")]
    test_mode: bool,

    /// Enable verbose output (request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            mode: self.resolve_mode(),
            host: self.host,
            port: self.port,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source = source_from_config(&config.source)?;

        output.highlight(&format!(
            "Serving on http://{}:{}/page/<id>",
            config.server.host, config.server.port
        ));
        match config.source.mode {
            SourceMode::Live => output.info(&format!("Source: {}", config.source.api_url)),
            SourceMode::Fixture => output.info("Source: canned test records"),
        }
        output.info("Stop with Ctrl-C or GET /quit");

        run_server(server_config_from_config(&config), source)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Resolve source mode from the --test flag.
    fn resolve_mode(&self) -> Option<SourceMode> {
        self.test_mode.then_some(SourceMode::Fixture)
    }
}
