//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use hostedhooks::api::ApiError;
use hostedhooks::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, unreadable config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, API error, etc.
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if let ConfigError::FileRead { .. } = error {
        eprintln!("\nRun 'hostedhooks init' to generate a configuration template.");
    }
}

/// Prints helpful hints for common API errors.
pub fn print_run_hint(error: &RunError) {
    match error {
        RunError::Api(ApiError::MissingApiKey) => {
            eprintln!(
                "\nPass --api-key, set [api] key in the config file, or export HOSTEDHOOKS_API_KEY."
            );
        }
        RunError::Api(ApiError::Status { code: 401, .. }) => {
            eprintln!("\nThe API key was rejected. Check that it belongs to this account.");
        }
        _ => {}
    }
}

/// Level used when `RUST_LOG` is not set.
#[must_use]
pub const fn default_log_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that stdout carries only the JSON result.
pub fn setup_tracing(verbose: bool) {
    let level = default_log_level(verbose);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
