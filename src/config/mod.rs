//! Configuration layer.
//!
//! This module provides:
//! - Client connection settings ([`ClientConfig`], [`ApiKey`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration for the command-line front end ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The command-line front end resolves values with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (`--api-key`, `--base-url`)
//! 2. **TOML config file** (`[api] key`, `[api] base_url`)
//! 3. **Environment** (`HOSTEDHOOKS_API_KEY`, key only)
//! 4. **Built-in defaults** (base URL only)
//!
//! An empty key at any level counts as absent and falls through.
//!
//! # Library use
//!
//! The API client only ever sees a [`ClientConfig`]. It never reads the
//! environment; [`ClientConfig::from_env`] exists for programs that want
//! the conventional variable without the CLI layers.

mod cli;
mod client;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{
    AppsCommand, AttemptsCommand, Cli, Command, EndpointChangeArgs, EndpointsCommand,
    EventsCommand, MessageArgs, MessagesCommand, NewEndpointArgs, PageArgs, StatusArg,
    SubscriptionsCommand,
};
pub use client::{ApiKey, ClientConfig, parse_base_url};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
