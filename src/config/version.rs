//! Client and API version strings.

/// Client version reported in the `User-Agent` header.
///
/// Fixed at `1.0`; it does not follow the crate version.
pub const CLIENT_VERSION: &str = "1.0";

/// Version of the MessageBird REST API this client speaks.
pub const API_VERSION: &str = "2.0";

/// Returns the `User-Agent` header sent with every request.
///
/// The format is `MessageBird/ApiClient/{API_VERSION} Rust/{CLIENT_VERSION}`.
///
/// # Example
///
/// ```rust
/// use messagebird_api::config::{user_agent, API_VERSION, CLIENT_VERSION};
///
/// let agent = user_agent();
/// assert!(agent.contains(API_VERSION));
/// assert!(agent.ends_with(CLIENT_VERSION));
/// ```
#[must_use]
pub fn user_agent() -> String {
    format!("MessageBird/ApiClient/{API_VERSION} Rust/{CLIENT_VERSION}")
}
