//! # MessageBird API Rust Client
//!
//! A blocking client for the MessageBird REST API. It builds authenticated
//! requests for API resources, sends them, and maps every response to either
//! an updated resource or a [`RestError`].
//!
//! ## Overview
//!
//! This crate provides:
//! - [`RestClient`] with `retrieve` and `create` operations over any [`Resource`]
//! - The [`Resource`] trait that API entities implement
//! - [`RestError`], one variant per failure mode, with the API's own error
//!   descriptions surfaced through [`ApiErrorPayload`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use messagebird_api::RestClient;
//!
//! let client = RestClient::new("live_abc123");
//!
//! let mut message = Message::new("MessageBird", "Hello!", &[31612345678]);
//! client.create(&mut message)?;
//! println!("Created message {}", message.id.unwrap());
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use messagebird_api::RestError;
//!
//! match client.retrieve(&mut message) {
//!     Ok(message) => println!("Status: {}", message.status),
//!     Err(RestError::Api(payload)) => {
//!         for error in &payload.errors {
//!             println!("{}: {}", error.code, error.description);
//!         }
//!     }
//!     Err(RestError::ServerError) => println!("Try again later"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Endpoint and access key live on the client instance
//! - **Blocking**: Each operation sends one request and waits for it
//! - **No retries**: Every failure is returned to the caller as-is
//! - **Thread-safe**: All types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod rest;

pub use clients::{ApiErrorDetail, ApiErrorPayload, HttpMethod, RestClient, RestError};
pub use config::{AccessKey, API_VERSION, CLIENT_VERSION, DEFAULT_ENDPOINT};
pub use rest::Resource;
