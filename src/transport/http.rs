//! Wire-level request and response values exchanged between the API client
//! and a transport.

use std::future::Future;
use std::sync::Arc;

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// One call to the HostedHooks API, fully resolved.
///
/// The API client fills in the URL (base, path segments and pagination
/// query), the JSON headers and the bearer token before a transport ever
/// sees it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the query string
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized JSON body for POST and PATCH
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with empty headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Read operations: lists and single-resource lookups.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create operations and messages.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Partial updates of apps and endpoints.
    #[must_use]
    pub fn patch(url: Url) -> Self {
        Self::new(Method::PATCH, url)
    }

    #[must_use]
    pub fn with_body(self, body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }

    /// Sets `name`, dropping any value already present under it.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// What the server answered, body read to the end.
///
/// Error statuses are ordinary responses at this level; the API client
/// turns them into [`crate::api::ApiError::Status`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body bytes, usually JSON
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 4xx or 5xx: the cases the API client reports as failures.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Body as text, or `None` when it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Carries [`HttpRequest`]s to the API and brings back the answer.
///
/// [`crate::api::HostedHooks`] is generic over this trait. Production code
/// uses [`super::ReqwestClient`]; tests plug in a transport that records
/// requests and replies with canned JSON.
///
/// # Example
///
/// ```ignore
/// use hostedhooks::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct NoApps;
///
/// impl HttpClient for NoApps {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), b"[]".to_vec()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Performs one exchange.
    ///
    /// # Errors
    ///
    /// Only when no response arrived: [`HttpError::Connection`],
    /// [`HttpError::Timeout`] or [`HttpError::InvalidUrl`]. A 404 or 500
    /// is `Ok`.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// A shared transport can back several clients.
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).request(req)
    }
}
