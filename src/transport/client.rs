//! Production transport backed by reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Sends API calls over the network with `reqwest`.
///
/// [`ReqwestClient::new`] keeps reqwest's defaults: pooled connections,
/// rustls, no overall timeout. Nothing is retried. Wrap a tuned
/// `reqwest::Client` with [`ReqwestClient::from_client`] for timeouts or
/// a proxy.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use hostedhooks::api::HostedHooks;
/// use hostedhooks::config::ClientConfig;
/// use hostedhooks::transport::ReqwestClient;
///
/// # fn example() -> Result<(), reqwest::Error> {
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// let client =
///     HostedHooks::with_http_client(ClientConfig::from_env(), ReqwestClient::from_client(http));
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut outgoing = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            outgoing = outgoing.body(body);
        }

        let response = outgoing.send().await.map_err(classify)?;
        let status = response.status();
        let headers = response.headers().clone();

        // A body cut off mid-read is a connection failure, not an empty answer
        let body = response.bytes().await.map_err(classify)?;

        Ok(HttpResponse::new(status, headers, body.to_vec()))
    }
}

fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
