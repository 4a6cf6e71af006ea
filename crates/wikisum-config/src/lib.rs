//! Configuration management for wikisum.
//!
//! Parses `wikisum.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `source.api_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override record source mode.
    pub mode: Option<SourceMode>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wikisum.toml";

/// Upper bound for `source.timeout_secs`.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Record source configuration.
    pub source: SourceConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
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

/// Where page records come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Query the MediaWiki API.
    #[default]
    Live,
    /// Serve canned records only.
    Fixture,
}

/// Record source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Lookup strategy.
    pub mode: SourceMode,
    /// MediaWiki `api.php` endpoint.
    pub api_url: String,
    /// Per-request timeout for API calls.
    pub timeout_secs: u64,
    /// Extra fixture records (JSON array), resolved against the config
    /// file's directory.
    pub fixtures_file: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Live,
            api_url: "https://en.wikipedia.org/w/api.php".to_owned(),
            timeout_secs: 30,
            fixtures_file: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.api_url`").
        field: String,
        /// Error message (e.g., "${`WIKI_API`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `wikisum.toml` in current directory and parents.
    ///
    /// CLI settings are applied before environment expansion and validation,
    /// so a `--test` run never trips over live-only settings in the file.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.expand_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(mode) = settings.mode {
            self.source.mode = mode;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] once CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_source()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 would bind a random port nobody knows about
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate source configuration.
    fn validate_source(&self) -> Result<(), ConfigError> {
        // Fixture mode never talks to the API
        if self.source.mode == SourceMode::Live {
            require_non_empty(&self.source.api_url, "source.api_url")?;
            require_http_url(&self.source.api_url, "source.api_url")?;
        }

        let timeout = self.source.timeout_secs;
        if timeout == 0 {
            return Err(ConfigError::Validation(
                "source.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if timeout > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "source.timeout_secs cannot exceed {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    ///
    /// `source.api_url` is left as written in fixture mode.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        if self.source.mode == SourceMode::Live {
            self.source.api_url = expand::expand_env(&self.source.api_url, "source.api_url")?;
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        if let Some(fixtures) = &self.source.fixtures_file
            && fixtures.is_relative()
        {
            self.source.fixtures_file = Some(config_dir.join(fixtures));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.source.mode, SourceMode::Live);
        assert_eq!(config.source.api_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.source.timeout_secs, 30);
        assert!(config.source.fixtures_file.is_none());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_source_config() {
        let toml = r#"
[source]
mode = "fixture"
api_url = "https://de.wikipedia.org/w/api.php"
timeout_secs = 5
fixtures_file = "pages.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source.mode, SourceMode::Fixture);
        assert_eq!(config.source.api_url, "https://de.wikipedia.org/w/api.php");
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(
            config.source.fixtures_file,
            Some(PathBuf::from("pages.json"))
        );
    }

    #[test]
    fn test_parse_unknown_mode_fails() {
        let toml = r#"
[source]
mode = "cached"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_resolve_relative_fixtures_file() {
        let mut config = Config::default();
        config.source.fixtures_file = Some(PathBuf::from("data/pages.json"));

        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.source.fixtures_file,
            Some(PathBuf::from("/project/data/pages.json"))
        );
    }

    #[test]
    fn test_resolve_absolute_fixtures_file_unchanged() {
        let mut config = Config::default();
        config.source.fixtures_file = Some(PathBuf::from("/srv/pages.json"));

        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.source.fixtures_file,
            Some(PathBuf::from("/srv/pages.json"))
        );
    }

    #[test]
    fn test_apply_cli_settings_host() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_apply_cli_settings_port_and_mode() {
        let mut config = Config::default();
        let overrides = CliSettings {
            port: Some(8080),
            mode: Some(SourceMode::Fixture),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.source.mode, SourceMode::Fixture);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.source.mode, SourceMode::Live);
    }

    #[test]
    fn test_expand_env_vars_server_host() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WIKISUM_TEST_HOST", "0.0.0.0");
        }

        let toml = r#"
[server]
host = "${WIKISUM_TEST_HOST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");

        unsafe {
            std::env::remove_var("WIKISUM_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_env_vars_api_url_default() {
        let toml = r#"
[source]
api_url = "${WIKISUM_TEST_UNSET_API:-https://fr.wikipedia.org/w/api.php}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.source.api_url, "https://fr.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        let toml = r#"
[source]
api_url = "${WIKISUM_TEST_MISSING_API}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        let ConfigError::EnvVar { field, .. } = err else {
            panic!("expected EnvVar error, got {err:?}");
        };
        assert_eq!(field, "source.api_url");
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host cannot be empty"));
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port cannot be 0"));
    }

    #[test]
    fn test_validate_api_url_invalid_scheme() {
        let mut config = Config::default();
        config.source.api_url = "ftp://en.wikipedia.org".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source.api_url must start with"));
    }

    #[test]
    fn test_validate_api_url_ignored_in_fixture_mode() {
        let mut config = Config::default();
        config.source.mode = SourceMode::Fixture;
        config.source.api_url = String::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_validate_timeout_too_high() {
        let mut config = Config::default();
        config.source.timeout_secs = 301;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed 300"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 6000\n\n[source]\nmode = \"fixture\"\nfixtures_file = \"pages.json\""
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 6000);
        assert_eq!(config.source.mode, SourceMode::Fixture);
        assert_eq!(
            config.source.fixtures_file,
            Some(dir.path().join("pages.json"))
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        std::fs::write(&path, "[server]\nport = 6000\n").unwrap();
        let settings = CliSettings {
            port: Some(7000),
            mode: Some(SourceMode::Fixture),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.source.mode, SourceMode::Fixture);
    }

    #[test]
    fn test_load_rejects_invalid_cli_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            port: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_cli_fixture_mode_skips_live_url_checks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        let settings = CliSettings {
            mode: Some(SourceMode::Fixture),
            ..Default::default()
        };

        for api_url in ["${WIKISUM_TEST_UNSET_LIVE_API}", "ftp://en.wikipedia.org"] {
            std::fs::write(
                &path,
                format!("[source]\nmode = \"live\"\napi_url = \"{api_url}\"\n"),
            )
            .unwrap();

            let config = Config::load(Some(&path), Some(&settings)).unwrap();

            assert_eq!(config.source.mode, SourceMode::Fixture);
            assert_eq!(config.source.api_url, api_url);
        }
    }

    #[test]
    fn test_load_live_mode_rejects_bad_api_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        std::fs::write(&path, "[source]\napi_url = \"ftp://en.wikipedia.org\"\n").unwrap();

        let settings = CliSettings::default();

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_expand_env_vars_skips_api_url_in_fixture_mode() {
        let mut config = Config::default();
        config.source.mode = SourceMode::Fixture;
        config.source.api_url = "${WIKISUM_TEST_MISSING_API}".to_owned();

        config.expand_env_vars().unwrap();

        assert_eq!(config.source.api_url, "${WIKISUM_TEST_MISSING_API}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/wikisum.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikisum.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
