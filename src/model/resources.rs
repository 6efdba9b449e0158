//! Resource shapes returned by the API.
//!
//! These mirror the JSON the service produces. Timestamps are kept as the
//! server's strings and identifiers are opaque. Enumerated fields accept
//! values this crate does not know yet and send them back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tenant application registered with the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// A subscriber of an [`App`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub subscriber_name: String,
    pub created_at: String,
    /// The owning app, embedded read-only.
    pub app: App,
}

/// Subscription fields embedded in an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub id: String,
    pub subscriber_name: String,
    pub created_at: String,
}

/// An event type that endpoints can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    pub event_type: String,
    pub created_at: String,
    /// Present when listed per app, absent when nested in an endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

/// Whether an endpoint receives deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    Active,
    Inactive,
    /// A status introduced by the service after this crate was written.
    #[serde(untagged)]
    Other(String),
}

impl EndpointStatus {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Other(status) => status,
        }
    }
}

impl std::fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL registered under a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    pub status: EndpointStatus,
    /// Percentage of failed deliveries, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate: Option<f64>,
    pub created_at: String,
    /// Event types this endpoint is subscribed to, in server order.
    #[serde(default)]
    pub webhook_events: Vec<WebhookEvent>,
    pub subscription: SubscriptionSummary,
}

/// A single event instance submitted for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Arbitrary user payload.
    pub data: Value,
    pub event_type: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// `null` and absent both decode as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_payload: Option<bool>,
    pub created_at: String,
}

/// Retry state of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStatus {
    Scheduled,
    Failed,
    #[serde(untagged)]
    Other(String),
}

/// Outcome of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptOutcome {
    Success,
    Failed,
    #[serde(untagged)]
    Other(String),
}

/// The envelope delivered to the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptPayload {
    #[serde(rename = "type")]
    pub event_type: String,
    pub version: String,
    pub created: String,
    pub data: Value,
}

/// One delivery attempt of a message to an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookAttempt {
    pub id: String,
    /// HTTP status returned by the endpoint, as the service reports it ("200").
    pub status_code: String,
    #[serde(default)]
    pub retry_status: Option<RetryStatus>,
    pub status_message: AttemptOutcome,
    pub payload: AttemptPayload,
    /// Body returned by the endpoint.
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub app_id: String,
    pub endpoint_id: String,
    pub message_id: String,
    pub created_at: String,
}

impl WebhookAttempt {
    /// Parses `status_code` as a number, if the service sent one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status_code.parse().ok()
    }
}
