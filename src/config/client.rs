//! Connection settings for the API client.

use std::fmt;

use url::Url;

use super::ConfigError;
use super::defaults;

/// A bearer credential for the API.
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, treating an empty or whitespace-only string as absent.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Returns the raw key for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Where and as whom the client talks to the API.
///
/// The client never reads the environment itself. The program's entry
/// point resolves the credential once, through [`ClientConfig::from_env`]
/// or its own means, and hands the result over.
///
/// A missing key is not an error here: requests fail with
/// [`crate::api::ApiError::MissingApiKey`] when they are made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    api_key: Option<ApiKey>,
}

impl ClientConfig {
    /// Creates a configuration for the hosted service.
    #[must_use]
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key,
        }
    }

    /// Creates a configuration with the key taken from
    /// [`defaults::API_KEY_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`], with variables read through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::new(lookup(defaults::API_KEY_ENV).and_then(ApiKey::new))
    }

    /// Points the client at another deployment of the API.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Replaces the credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Parses and checks a base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] if the string is not an absolute
/// `http` or `https` URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid_base_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid_base_url(
            raw,
            "scheme must be http or https",
        ));
    }

    if url.cannot_be_a_base() {
        return Err(ConfigError::invalid_base_url(raw, "URL cannot be a base"));
    }

    Ok(url)
}

fn default_base_url() -> Url {
    Url::parse(defaults::BASE_URL).expect("default base URL is valid")
}
