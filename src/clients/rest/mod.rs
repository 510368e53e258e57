//! REST API client for MessageBird.
//!
//! This module provides the resource-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The client with `retrieve()`, `create()`, `update()` and `delete()`
//! - [`RestError`]: Error type for every failed operation
//! - [`ApiErrorPayload`] and [`ApiErrorDetail`]: The error body the API returns on client errors
//!
//! # Status Handling
//!
//! - `retrieve` succeeds on 200, `create` on 201
//! - Any other status below 400 is [`RestError::UnexpectedStatus`]
//! - 400 and above are classified by [`RestError::from_status`]
//!
//! No request is ever retried.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::{ApiErrorDetail, ApiErrorPayload, RestError};
