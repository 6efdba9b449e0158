//! Request bodies for create and update operations.
//!
//! Optional fields left as `None` are omitted from the JSON body, so the
//! service applies its own default (on create) or keeps the current value
//! (on update).

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::EndpointStatus;

/// Body for creating or renaming an app or subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct NameParams<'a> {
    pub name: &'a str,
}

/// Which event types an endpoint receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnabledEvents {
    /// Every event type of the app. Sent as `"*"`.
    All,
    /// Only the listed event types.
    Only(Vec<String>),
}

impl EnabledEvents {
    /// Builds an explicit list of event types.
    pub fn only<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(events.into_iter().map(Into::into).collect())
    }
}

impl Serialize for EnabledEvents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("*"),
            Self::Only(events) => events.serialize(serializer),
        }
    }
}

/// Body for `create_endpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEndpointParams {
    /// Delivery URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payload version the endpoint expects.
    pub version: String,
    /// Defaults to active on the server when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,
    pub enabled_events: EnabledEvents,
}

impl CreateEndpointParams {
    /// Creates params with the required fields.
    pub fn new(
        url: impl Into<String>,
        version: impl Into<String>,
        enabled_events: EnabledEvents,
    ) -> Self {
        Self {
            url: url.into(),
            description: None,
            version: version.into(),
            status: None,
            enabled_events,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: EndpointStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Body for `update_endpoint`. Every field is optional; unset fields are
/// left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateEndpointParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EndpointStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_events: Option<EnabledEvents>,
}

impl UpdateEndpointParams {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: EndpointStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_enabled_events(mut self, events: EnabledEvents) -> Self {
        self.enabled_events = Some(events);
        self
    }

    /// Returns true if no field would be sent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.description.is_none()
            && self.version.is_none()
            && self.status.is_none()
            && self.enabled_events.is_none()
    }
}

/// Body for the three message-creation operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMessageParams {
    pub event_type: String,
    /// Arbitrary payload delivered to endpoints.
    pub data: Value,
    pub version: String,
    /// Generated by the server when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Server default is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_payload: Option<bool>,
}

impl CreateMessageParams {
    /// Creates params with the required fields.
    pub fn new(event_type: impl Into<String>, version: impl Into<String>, data: Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            version: version.into(),
            event_id: None,
            override_payload: None,
        }
    }

    #[must_use]
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    #[must_use]
    pub const fn with_override_payload(mut self, override_payload: bool) -> Self {
        self.override_payload = Some(override_payload);
        self
    }
}
