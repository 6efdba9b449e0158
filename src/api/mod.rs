//! Client for the HostedHooks REST API.
//!
//! This module provides:
//! - The API client with one method per remote operation ([`HostedHooks`])
//! - The error type shared by all operations ([`ApiError`])
//! - Pagination query parameters ([`Pagination`])
//!
//! # Error handling
//!
//! Every operation returns `Result<T, ApiError>`. Responses with a status of
//! 400 or above become [`ApiError::Status`] carrying the numeric status and
//! the server's `error` message; transport failures and undecodable bodies
//! have their own variants. Nothing is retried.

mod client;
mod error;
mod query;


pub use client::HostedHooks;
pub use error::ApiError;
pub use query::{PageParam, Pagination};
