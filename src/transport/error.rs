//! Error types for the transport layer.

use thiserror::Error;

/// A failure to complete an HTTP exchange.
///
/// Only covers the case where no response was obtained. A response with an
/// error status is not a transport failure and is reported by the API layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, refused connections, TLS errors
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
