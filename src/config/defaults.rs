//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Base URL of the hosted API.
pub const BASE_URL: &str = "https://hostedhooks.com/api/v1";

/// Environment variable read by [`super::ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "HOSTEDHOOKS_API_KEY";

/// Default output path for `hostedhooks init`.
pub const CONFIG_FILE: &str = "hostedhooks.toml";
