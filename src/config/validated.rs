//! Validated configuration after merging CLI, TOML and environment sources.
//!
//! This module contains the final configuration used by the command-line
//! front end. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use url::Url;

use super::cli::Cli;
use super::client::{ApiKey, ClientConfig, parse_base_url};
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and an optional
/// TOML config, or [`ValidatedConfig::from_sources`] to also control how
/// environment variables are read.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings handed to the API client
    pub client: ClientConfig,

    /// Print JSON on a single line
    pub compact: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.client.api_key().is_some() {
            "set"
        } else {
            "unset"
        };

        write!(
            f,
            "Config {{ base_url: {}, api_key: {}, compact: {} }}",
            self.client.base_url(),
            api_key,
            self.compact,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments, optional TOML
    /// config and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        Self::from_sources(cli, toml, |name| std::env::var(name).ok())
    }

    /// Creates a validated configuration, reading environment variables
    /// through `env`.
    ///
    /// Priority for the API key: CLI > TOML > environment. Priority for the
    /// base URL: CLI > TOML > default.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn from_sources<F>(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let base_url = Self::resolve_base_url(cli, toml)?;
        let api_key = Self::resolve_api_key(cli, toml, env);

        // Flags only enable
        let compact = cli.compact || toml.is_some_and(|t| t.output.compact);

        let mut client = ClientConfig::new(api_key);
        if let Some(base_url) = base_url {
            client = client.with_base_url(base_url);
        }

        Ok(Self {
            client,
            compact,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Url>, ConfigError> {
        cli.base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .map(parse_base_url)
            .transpose()
    }

    fn resolve_api_key<F>(cli: &Cli, toml: Option<&TomlConfig>, env: F) -> Option<ApiKey>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        // Empty values fall through to the next source
        if let Some(key) = cli.api_key.as_deref().and_then(ApiKey::new) {
            return Some(key);
        }

        if let Some(key) = toml
            .and_then(|t| t.api.key.as_deref())
            .and_then(ApiKey::new)
        {
            return Some(key);
        }

        env(defaults::API_KEY_ENV).and_then(ApiKey::new)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
