//! HTTP client for MessageBird API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into an authenticated, blocking HTTP exchange.

use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::rest::RestError;
use crate::config::{user_agent, AccessKey};

/// Blocking HTTP client for the MessageBird API.
///
/// The client handles:
/// - URI construction as `{endpoint}/{path}`
/// - The `Accept`, `Content-Type`, `User-Agent` and `Authorization` headers
///
/// Status codes are not interpreted here; that is the job of
/// [`RestClient`](crate::clients::RestClient).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Changing the endpoint or access key needs
/// `&mut self`, so it cannot happen while a request is in flight.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::blocking::Client,
    /// Base URL (e.g., `https://rest.messagebird.com`).
    endpoint: String,
    /// Credential sent in the `Authorization` header.
    access_key: AccessKey,
    /// Value of the `User-Agent` header.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given endpoint and access key.
    ///
    /// Neither value is validated.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(endpoint: impl Into<String>, access_key: AccessKey) -> Self {
        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            access_key,
            user_agent: user_agent(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replaces the base URL requests are sent to.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    /// Returns the access key.
    #[must_use]
    pub const fn access_key(&self) -> &AccessKey {
        &self.access_key
    }

    /// Replaces the access key.
    pub fn set_access_key(&mut self, access_key: AccessKey) {
        self.access_key = access_key;
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the full URI for a path relative to the endpoint.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    /// Builds the reqwest request for `request` with all default headers set.
    fn prepare(&self, request: &HttpRequest) -> reqwest::blocking::RequestBuilder {
        let builder = self
            .client
            .request(request.http_method.into(), self.url(&request.path))
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(
                reqwest::header::AUTHORIZATION,
                self.access_key.authorization(),
            );

        match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder,
        }
    }

    /// Sends a request and waits for the response headers.
    ///
    /// Any status code, including 4xx and 5xx, is returned as a response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unhandled`] if the request could not be sent or
    /// no response was received.
    pub fn request(&self, request: &HttpRequest) -> Result<HttpResponse, RestError> {
        tracing::debug!(
            method = %request.http_method,
            uri = %self.url(&request.path),
            "Sending request to MessageBird API"
        );

        let response = self.prepare(request).send()?;
        Ok(HttpResponse::new(response))
    }
}
