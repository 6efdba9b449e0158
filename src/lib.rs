//! hostedhooks: typed client for the HostedHooks webhook management API
//!
//! A thin wrapper around the REST API: apps, subscriptions, endpoints,
//! webhook events, messages and webhook attempts. Each call is one HTTP
//! request with a bearer token, JSON in and out.

pub mod api;
pub mod config;
pub mod model;
pub mod transport;

#[cfg(test)]
mod test_fixtures;
