//! HTTP client types for MessageBird API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The blocking HTTP client that builds authenticated requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response whose body has not been read yet
//! - [`HttpMethod`]: HTTP methods the client sends (GET, POST)
//! - [`rest::RestClient`]: The resource-level client
//! - [`rest::RestError`]: Error type for all operations
//!
//! # Example
//!
//! ```rust,no_run
//! use messagebird_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use messagebird_api::AccessKey;
//!
//! let client = HttpClient::new("https://rest.messagebird.com", AccessKey::new("test_key"));
//! let response = client.request(&HttpRequest::new(HttpMethod::Get, "balance"))?;
//! println!("Status: {}", response.code);
//! # Ok::<(), messagebird_api::RestError>(())
//! ```

mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{ApiErrorDetail, ApiErrorPayload, RestClient, RestError};
