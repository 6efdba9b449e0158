//! Error type for API operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Failure of an API call.
///
/// Every operation of [`super::HostedHooks`] returns this type. A call
/// either succeeds with the typed result or fails with exactly one of
/// these kinds; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was configured. Detected before any request is sent.
    #[error("No API key configured (set HOSTEDHOOKS_API_KEY or pass one explicitly)")]
    MissingApiKey,

    /// The API key contains characters that cannot appear in a header.
    #[error("API key cannot be used in an Authorization header")]
    InvalidApiKey,

    /// The request path could not be joined onto the base URL.
    #[error("Cannot build request URL from base '{base}'")]
    InvalidUrl {
        /// The configured base URL
        base: String,
    },

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a status of 400 or above.
    #[error("HTTP {code}: {}", message.as_deref().unwrap_or("no error message"))]
    Status {
        /// Numeric HTTP status
        code: u16,
        /// Error message reported by the server, if any
        message: Option<String>,
    },

    /// The response body was not JSON of the expected shape.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        /// Numeric HTTP status of the response
        status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::Status`] errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the server's error message for [`ApiError::Status`] errors.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the server reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404, .. })
    }
}
