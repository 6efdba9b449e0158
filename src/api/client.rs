//! The HostedHooks API client.

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ApiKey, ClientConfig};
use crate::model::{
    App, CreateEndpointParams, CreateMessageParams, Endpoint, Message, NameParams, Subscription,
    UpdateEndpointParams, WebhookAttempt, WebhookEvent,
};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

use super::query::{self, Pagination};
use super::ApiError;

/// Typed client for the HostedHooks API.
///
/// Each method performs exactly one HTTP request and returns the decoded
/// response. The client holds no mutable state, so a shared reference can
/// serve any number of concurrent calls.
///
/// # Type Parameters
///
/// - `H`: The transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use hostedhooks::api::HostedHooks;
/// use hostedhooks::config::ClientConfig;
///
/// # async fn example() -> Result<(), hostedhooks::api::ApiError> {
/// let client = HostedHooks::new(ClientConfig::from_env());
/// let app = client.create_app("ABC SaaS").await?;
/// println!("created {}", app.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HostedHooks<H = ReqwestClient> {
    config: ClientConfig,
    http: H,
}

impl HostedHooks<ReqwestClient> {
    /// Creates a client using reqwest with default settings.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, ReqwestClient::new())
    }
}

impl<H> HostedHooks<H> {
    /// Creates a client that sends requests through `http`.
    #[must_use]
    pub const fn with_http_client(config: ClientConfig, http: H) -> Self {
        Self { config, http }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl<H: HttpClient> HostedHooks<H> {
    // Apps

    /// `GET /apps`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_apps(&self, pagination: Option<&Pagination>) -> Result<Vec<App>, ApiError> {
        self.get(&["apps"], pagination).await
    }

    /// `POST /apps`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_app(&self, name: &str) -> Result<App, ApiError> {
        self.post(&["apps"], &NameParams { name }).await
    }

    /// `PATCH /apps/{app_id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_app(&self, app_id: &str, name: &str) -> Result<App, ApiError> {
        self.patch(&["apps", app_id], &NameParams { name }).await
    }

    // Subscriptions

    /// `GET /subscriptions/{subscription_id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_subscription(
        &self,
        subscription_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Subscription, ApiError> {
        self.get(&["subscriptions", subscription_id], pagination)
            .await
    }

    /// `GET /apps/{app_id}/subscriptions`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_subscriptions(
        &self,
        app_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Vec<Subscription>, ApiError> {
        self.get(&["apps", app_id, "subscriptions"], pagination)
            .await
    }

    /// `POST /apps/{app_id}/subscriptions`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_subscription(
        &self,
        app_id: &str,
        name: &str,
    ) -> Result<Subscription, ApiError> {
        self.post(&["apps", app_id, "subscriptions"], &NameParams { name })
            .await
    }

    // Endpoints

    /// `GET /apps/{app_id}/endpoints/{endpoint_id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_endpoint(
        &self,
        app_id: &str,
        endpoint_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Endpoint, ApiError> {
        self.get(&["apps", app_id, "endpoints", endpoint_id], pagination)
            .await
    }

    /// `GET /apps/{app_id}/endpoints`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_endpoints(
        &self,
        app_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Vec<Endpoint>, ApiError> {
        self.get(&["apps", app_id, "endpoints"], pagination).await
    }

    /// `POST /subscriptions/{subscription_id}/endpoints`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_endpoint(
        &self,
        subscription_id: &str,
        params: &CreateEndpointParams,
    ) -> Result<Endpoint, ApiError> {
        self.post(&["subscriptions", subscription_id, "endpoints"], params)
            .await
    }

    /// `PATCH /subscriptions/{subscription_id}/endpoints/{endpoint_id}`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_endpoint(
        &self,
        subscription_id: &str,
        endpoint_id: &str,
        params: &UpdateEndpointParams,
    ) -> Result<Endpoint, ApiError> {
        self.patch(
            &["subscriptions", subscription_id, "endpoints", endpoint_id],
            params,
        )
        .await
    }

    // Webhook events

    /// `GET /apps/{app_id}/webhook_events`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_webhook_events(
        &self,
        app_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Vec<WebhookEvent>, ApiError> {
        self.get(&["apps", app_id, "webhook_events"], pagination)
            .await
    }

    // Messages

    /// `POST /apps/{app_id}/messages`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_app_message(
        &self,
        app_id: &str,
        params: &CreateMessageParams,
    ) -> Result<Message, ApiError> {
        self.post(&["apps", app_id, "messages"], params).await
    }

    /// `POST /subscriptions/{subscription_id}/messages`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_subscription_message(
        &self,
        subscription_id: &str,
        params: &CreateMessageParams,
    ) -> Result<Message, ApiError> {
        self.post(&["subscriptions", subscription_id, "messages"], params)
            .await
    }

    /// `POST /subscriptions/{subscription_id}/endpoints/{endpoint_id}/messages`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_endpoint_message(
        &self,
        subscription_id: &str,
        endpoint_id: &str,
        params: &CreateMessageParams,
    ) -> Result<Message, ApiError> {
        self.post(
            &[
                "subscriptions",
                subscription_id,
                "endpoints",
                endpoint_id,
                "messages",
            ],
            params,
        )
        .await
    }

    // Webhook attempts

    /// `GET /apps/{app_id}/endpoints/{endpoint_id}/webhook_attempts`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_webhook_attempt(
        &self,
        app_id: &str,
        endpoint_id: &str,
    ) -> Result<WebhookAttempt, ApiError> {
        self.get(
            &["apps", app_id, "endpoints", endpoint_id, "webhook_attempts"],
            None,
        )
        .await
    }

    /// `GET /apps/{app_id}/webhook_attempts`
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_webhook_attempts(
        &self,
        app_id: &str,
        pagination: Option<&Pagination>,
    ) -> Result<Vec<WebhookAttempt>, ApiError> {
        self.get(&["apps", app_id, "webhook_attempts"], pagination)
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        pagination: Option<&Pagination>,
    ) -> Result<T, ApiError> {
        let mut url = self.url_for(path)?;
        query::apply(&mut url, pagination);

        self.send(HttpRequest::get(url)).await
    }

    async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;

        self.send(HttpRequest::post(url).with_body(body)).await
    }

    async fn patch<B, T>(&self, path: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;

        self.send(HttpRequest::patch(url).with_body(body)).await
    }

    /// Authorizes and sends a request, then decodes the response.
    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let api_key = self.config.api_key().ok_or(ApiError::MissingApiKey)?;
        let request = authorize(request, api_key)?;

        tracing::debug!("{} {}", request.method, request.url);

        let response = self.http.request(request).await?;

        tracing::debug!("Response status {}", response.status);

        decode_response(&response)
    }

    /// Appends `path` to the base URL, one percent-encoded segment per item.
    fn url_for(&self, path: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.config.base_url().clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                base: self.config.base_url().to_string(),
            })?
            .pop_if_empty()
            .extend(path);

        Ok(url)
    }
}

fn authorize(request: HttpRequest, api_key: &ApiKey) -> Result<HttpRequest, ApiError> {
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
        .map_err(|_| ApiError::InvalidApiKey)?;
    bearer.set_sensitive(true);

    let json = HeaderValue::from_static("application/json");

    Ok(request
        .with_header(AUTHORIZATION, bearer)
        .with_header(CONTENT_TYPE, json.clone())
        .with_header(ACCEPT, json))
}

/// Error body returned by the service.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn decode_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let status = response.status.as_u16();

    if response.is_error() {
        let message = error_message(&response.body);
        tracing::warn!(
            "API request failed with HTTP {status}: {}",
            message.as_deref().unwrap_or("no error message")
        );
        return Err(ApiError::Status {
            code: status,
            message,
        });
    }

    serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode { status, source })
}

/// Extracts the server's message from an error body: the `error` field of a
/// JSON object, or else the raw text.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json::from_slice(body)
    {
        return Some(message);
    }

    std::str::from_utf8(body)
        .ok()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}
