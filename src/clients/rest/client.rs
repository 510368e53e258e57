//! REST client implementation for the MessageBird API.
//!
//! This module provides the [`RestClient`] type, which runs the resource
//! operations (`retrieve`, `create`) on top of the
//! [`HttpClient`](crate::clients::HttpClient) and turns responses into
//! results.

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::{AccessKey, DEFAULT_ENDPOINT};
use crate::rest::Resource;

/// REST API client for MessageBird.
///
/// Every operation issues exactly one request and blocks until the response
/// has been handled. On success the resource passed in is updated from the
/// response body and handed back; on failure it is left untouched and a
/// [`RestError`] describes what went wrong.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; operations take `&self` and can run
/// concurrently from several threads.
///
/// # Example
///
/// ```rust,ignore
/// use messagebird_api::RestClient;
///
/// let client = RestClient::new("live_abc123");
///
/// let mut message = Message::with_id("8c3c48a8f6e2e9c1");
/// client.retrieve(&mut message)?;
/// println!("Status: {}", message.status);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client against the production endpoint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use messagebird_api::RestClient;
    ///
    /// let client = RestClient::new("test_key");
    /// assert_eq!(client.endpoint(), "https://rest.messagebird.com");
    /// ```
    #[must_use]
    pub fn new(access_key: impl Into<AccessKey>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, access_key)
    }

    /// Creates a new REST client against a custom endpoint.
    ///
    /// The endpoint is used as given and must not end with a slash.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>, access_key: impl Into<AccessKey>) -> Self {
        Self {
            http_client: HttpClient::new(endpoint, access_key.into()),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Replaces the base URL requests are sent to.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.http_client.set_endpoint(endpoint);
    }

    /// Returns the access key.
    #[must_use]
    pub const fn access_key(&self) -> &AccessKey {
        self.http_client.access_key()
    }

    /// Replaces the access key.
    pub fn set_access_key(&mut self, access_key: impl Into<AccessKey>) {
        self.http_client.set_access_key(access_key.into());
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.http_client.user_agent()
    }

    /// Fetches a resource and updates it from the response.
    ///
    /// Sends `GET {endpoint}/{name}/{id}`, or `GET {endpoint}/{name}` when the
    /// resource has no id. A 200 response body is passed to
    /// [`Resource::deserialize`] and the same resource is returned.
    ///
    /// # Errors
    ///
    /// - [`RestError::UnexpectedStatus`] for any other status below 400
    /// - The classification of [`RestError::from_status`] for 4xx and 5xx
    /// - [`RestError::Unhandled`] for transport or deserialization failures
    pub fn retrieve<'r, R: Resource>(&self, resource: &'r mut R) -> Result<&'r mut R, RestError> {
        let request = HttpRequest::new(HttpMethod::Get, resource.request_path());
        self.execute(&request, 200, resource)
    }

    /// Creates a resource and updates it from the response.
    ///
    /// Sends `POST {endpoint}/{name}` with the output of
    /// [`Resource::serialize`] as body. A 201 response body is passed to
    /// [`Resource::deserialize`] and the same resource is returned.
    ///
    /// # Errors
    ///
    /// - [`RestError::UnexpectedStatus`] for any other status below 400,
    ///   including 200
    /// - The classification of [`RestError::from_status`] for 4xx and 5xx
    /// - [`RestError::Unhandled`] for transport or (de)serialization failures
    pub fn create<'r, R: Resource>(&self, resource: &'r mut R) -> Result<&'r mut R, RestError> {
        let request =
            HttpRequest::new(HttpMethod::Post, resource.name()).with_body(resource.serialize()?);
        self.execute(&request, 201, resource)
    }

    /// Updating resources is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`RestError::NotImplemented`]; no request is sent.
    pub fn update<R: Resource>(&self, _resource: &R) -> Result<(), RestError> {
        Err(RestError::NotImplemented { operation: "update" })
    }

    /// Deleting resources is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`RestError::NotImplemented`]; no request is sent.
    pub fn delete<R: Resource>(&self, _resource: &R) -> Result<(), RestError> {
        Err(RestError::NotImplemented { operation: "delete" })
    }

    /// Sends `request` and deserializes the body into `resource` when the
    /// response status is `expected`.
    fn execute<'r, R: Resource>(
        &self,
        request: &HttpRequest,
        expected: u16,
        resource: &'r mut R,
    ) -> Result<&'r mut R, RestError> {
        let response = self.http_client.request(request)?;
        let code = response.code;

        if code == expected {
            let body = response.text()?;
            resource.deserialize(&body)?;
            return Ok(resource);
        }

        if !response.is_error() {
            tracing::warn!(
                method = %request.http_method,
                path = %request.path,
                code,
                expected,
                "Unexpected status code from MessageBird API"
            );
            return Err(RestError::UnexpectedStatus { code });
        }

        // An unreadable body classifies the same as an unparseable one.
        let body = if RestError::reads_body(code) {
            response.text().ok()
        } else {
            None
        };
        let error = RestError::from_status(code, body.as_deref());
        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            code,
            error = %error,
            "MessageBird API request failed"
        );
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contact {
        id: Option<String>,
    }

    impl Resource for Contact {
        fn name(&self) -> &str {
            "contacts"
        }

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn serialize(&self) -> Result<String, RestError> {
            Ok("{}".to_string())
        }

        fn deserialize(&mut self, _body: &str) -> Result<(), RestError> {
            Ok(())
        }
    }

    #[test]
    fn test_new_uses_default_endpoint() {
        let client = RestClient::new("test_key");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.access_key().as_ref(), "test_key");
    }

    #[test]
    fn test_with_endpoint_overrides_default() {
        let client = RestClient::with_endpoint("http://localhost:1234", "test_key");
        assert_eq!(client.endpoint(), "http://localhost:1234");
    }

    #[test]
    fn test_configuration_is_mutable() {
        let mut client = RestClient::new("test_key");
        client.set_endpoint("http://localhost:1234");
        client.set_access_key("live_key");
        assert_eq!(client.endpoint(), "http://localhost:1234");
        assert_eq!(client.access_key().as_ref(), "live_key");
    }

    #[test]
    fn test_user_agent_contains_versions() {
        let client = RestClient::new("test_key");
        assert!(client.user_agent().contains(crate::config::API_VERSION));
        assert!(client.user_agent().contains(crate::config::CLIENT_VERSION));
    }

    #[test]
    fn test_update_is_not_implemented() {
        let client = RestClient::new("test_key");
        for contact in [Contact { id: None }, Contact { id: Some("1".into()) }] {
            assert_eq!(
                client.update(&contact),
                Err(RestError::NotImplemented { operation: "update" })
            );
        }
    }

    #[test]
    fn test_delete_is_not_implemented() {
        let client = RestClient::new("test_key");
        let error = client.delete(&Contact { id: Some("1".into()) }).unwrap_err();
        assert!(error.to_string().contains("not implemented"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
