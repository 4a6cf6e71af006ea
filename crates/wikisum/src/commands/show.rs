//! `wikisum show` command implementation.

use std::path::PathBuf;

use clap::Args;
use wikisum_config::{CliSettings, Config, SourceMode};
use wikisum_report::summarize;
use wikisum_server::source_from_config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Numeric page id or page title.
    id: String,

    /// Path to configuration file (default: auto-discover wikisum.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use canned records instead of querying Wikipedia.
    #[arg(short = 't', long = "test")]
    test_mode: bool,
}

impl ShowArgs {
    /// Execute the show command: print one page summary to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the page cannot be found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            mode: self.test_mode.then_some(SourceMode::Fixture),
            ..CliSettings::default()
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source = source_from_config(&config.source)?;
        let record = source.fetch(&self.id)?;

        Output::new().document(&summarize(&record))?;
        Ok(())
    }
}
