//! HTTP response type for the MessageBird API client.

use crate::clients::rest::RestError;

/// A response received from the MessageBird API.
///
/// The status code is available immediately; the body stays on the wire
/// until [`HttpResponse::text`] is called. Dropping the response without
/// reading it releases the connection.
#[derive(Debug)]
pub struct HttpResponse {
    /// The HTTP status code of the response.
    pub code: u16,
    inner: reqwest::blocking::Response,
}

impl HttpResponse {
    pub(crate) fn new(inner: reqwest::blocking::Response) -> Self {
        Self {
            code: inner.status().as_u16(),
            inner,
        }
    }

    /// Returns `true` if the status code is in the 4xx or 5xx range.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Reads the full body as UTF-8 text, consuming the response.
    ///
    /// The body is decoded as UTF-8 whatever charset the response declares.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unhandled`] if reading the body fails or the
    /// body is not valid UTF-8.
    pub fn text(self) -> Result<String, RestError> {
        let bytes = self.inner.bytes()?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
