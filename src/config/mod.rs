//! Configuration types for the MessageBird API client.
//!
//! This module holds the values every request is built from:
//!
//! - [`DEFAULT_ENDPOINT`]: The production REST endpoint
//! - [`AccessKey`]: The access key sent in the `Authorization` header
//! - [`CLIENT_VERSION`] and [`API_VERSION`]: Version strings reported in the
//!   `User-Agent` header built by [`user_agent`]
//!
//! # Example
//!
//! ```rust
//! use messagebird_api::config::{user_agent, AccessKey, DEFAULT_ENDPOINT};
//!
//! let key = AccessKey::new("live_abc123");
//! assert_eq!(key.as_ref(), "live_abc123");
//! assert_eq!(DEFAULT_ENDPOINT, "https://rest.messagebird.com");
//! assert!(user_agent().starts_with("MessageBird/ApiClient/"));
//! ```

mod newtypes;
mod version;

pub use newtypes::AccessKey;
pub use version::{user_agent, API_VERSION, CLIENT_VERSION};

/// Base URL of the production MessageBird REST API.
///
/// Request URIs are built as `{endpoint}/{path}`, so endpoints are given
/// without a trailing slash.
pub const DEFAULT_ENDPOINT: &str = "https://rest.messagebird.com";
