//! Typed request and response shapes of the HostedHooks API.
//!
//! Resources ([`App`], [`Subscription`], [`Endpoint`], [`WebhookEvent`],
//! [`Message`], [`WebhookAttempt`]) are snapshots decoded from server
//! responses. Parameter types ([`CreateEndpointParams`],
//! [`UpdateEndpointParams`], [`CreateMessageParams`]) are the bodies sent
//! with create and update calls.

mod params;
mod resources;


pub(crate) use params::NameParams;
pub use params::{CreateEndpointParams, CreateMessageParams, EnabledEvents, UpdateEndpointParams};
pub use resources::{
    App, AttemptOutcome, AttemptPayload, Endpoint, EndpointStatus, Message, RetryStatus,
    Subscription, SubscriptionSummary, WebhookAttempt, WebhookEvent,
};
