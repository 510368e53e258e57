//! Error types for MessageBird REST API operations.
//!
//! Every failed operation surfaces as a [`RestError`]. Failed responses are
//! mapped to a variant by [`RestError::from_status`]:
//!
//! - **401, 404, 405, 422**: The body is parsed as an [`ApiErrorPayload`];
//!   [`RestError::Api`] when it parses, [`RestError::UnknownError`] otherwise
//! - **500-511, 598, 599**: [`RestError::ServerError`], body ignored
//! - **Anything else**: [`RestError::UnhandledStatus`]
//!
//! # Example
//!
//! ```rust
//! use messagebird_api::RestError;
//!
//! let body = r#"{"errors":[{"code":20,"description":"message not found","parameter":null}]}"#;
//! let error = RestError::from_status(404, Some(body));
//! assert_eq!(error.to_string(), "message not found");
//!
//! let error = RestError::from_status(503, None);
//! assert_eq!(error.to_string(), "something went wrong on our end, please try again");
//! ```

use std::fmt;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry of the `errors` array returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// MessageBird error code (e.g. `2` for a rejected access key).
    pub code: i64,
    /// Human readable description of the error.
    pub description: String,
    /// The request parameter the error relates to, if any.
    #[serde(default)]
    pub parameter: Option<String>,
}

/// The error body returned by the API on client errors.
///
/// The wire format is:
///
/// ```json
/// {"errors":[{"code":2,"description":"Request not allowed (incorrect access_key)","parameter":"access_key"}]}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    /// The errors reported by the API, in the order they were returned.
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiErrorPayload {
    /// Parses an API error body.
    ///
    /// Returns `None` when the text is not an error payload or when it
    /// carries no errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use messagebird_api::ApiErrorPayload;
    ///
    /// let payload = ApiErrorPayload::from_response(
    ///     r#"{"errors":[{"code":9,"description":"no (correct) recipients found","parameter":"recipients"}]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(payload.errors[0].code, 9);
    ///
    /// assert!(ApiErrorPayload::from_response("<html>Not Found</html>").is_none());
    /// ```
    #[must_use]
    pub fn from_response(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|payload| !payload.errors.is_empty())
    }
}

impl fmt::Display for ApiErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.description)?;
        }
        Ok(())
    }
}

/// Error type for MessageBird REST API operations.
///
/// Each variant is one failure mode; match on the variant (not on the
/// message text) to tell them apart.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RestError {
    /// The request completed, but not with the status the operation
    /// expects (200 for retrieve, 201 for create).
    #[error("unexpected status code {code}")]
    UnexpectedStatus {
        /// The HTTP status code received.
        code: u16,
    },

    /// The API rejected the request and explained why.
    #[error("{0}")]
    Api(ApiErrorPayload),

    /// A client error whose body could not be parsed as an error payload.
    #[error("unknown error for status {code}")]
    UnknownError {
        /// The HTTP status code received.
        code: u16,
    },

    /// The API failed on its side (5xx).
    #[error("something went wrong on our end, please try again")]
    ServerError,

    /// A status code this client has no handling for.
    #[error("unhandled status code {code}")]
    UnhandledStatus {
        /// The HTTP status code received.
        code: u16,
    },

    /// The operation is declared but not supported by this client.
    #[error("{operation} is not implemented")]
    NotImplemented {
        /// The name of the operation that was called.
        operation: &'static str,
    },

    /// Any other failure, such as a network error or a body that could not
    /// be (de)serialized.
    #[error("unhandled exception: {description}")]
    Unhandled {
        /// Description of the underlying cause.
        description: String,
    },
}

impl RestError {
    /// Classifies a failed response by its status code.
    ///
    /// `body` is only consulted for the status codes that carry an
    /// [`ApiErrorPayload`] (see [`RestError::reads_body`]).
    #[must_use]
    pub fn from_status(code: u16, body: Option<&str>) -> Self {
        match code {
            401 | 404 | 405 | 422 => body
                .and_then(ApiErrorPayload::from_response)
                .map_or(Self::UnknownError { code }, Self::Api),
            500..=511 | 598 | 599 => Self::ServerError,
            _ => Self::UnhandledStatus { code },
        }
    }

    /// Returns `true` if [`RestError::from_status`] needs the response body
    /// to classify `code`.
    #[must_use]
    pub const fn reads_body(code: u16) -> bool {
        matches!(code, 401 | 404 | 405 | 422)
    }

    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code }
            | Self::UnknownError { code }
            | Self::UnhandledStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Returns the API error payload, if the API explained the failure.
    #[must_use]
    pub const fn api_errors(&self) -> Option<&ApiErrorPayload> {
        match self {
            Self::Api(payload) => Some(payload),
            _ => None,
        }
    }

    fn unhandled(cause: &impl fmt::Display) -> Self {
        Self::Unhandled {
            description: cause.to_string(),
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(error: reqwest::Error) -> Self {
        Self::unhandled(&error)
    }
}

impl From<serde_json::Error> for RestError {
    fn from(error: serde_json::Error) -> Self {
        Self::unhandled(&error)
    }
}

impl From<FromUtf8Error> for RestError {
    fn from(error: FromUtf8Error) -> Self {
        Self::unhandled(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND_BODY: &str =
        r#"{"errors":[{"code":20,"description":"message not found","parameter":null}]}"#;

    #[test]
    fn test_classified_codes_surface_api_errors() {
        for code in [401, 404, 405, 422] {
            let error = RestError::from_status(code, Some(NOT_FOUND_BODY));
            assert_eq!(error.to_string(), "message not found", "status {code}");
            assert_eq!(error.api_errors().unwrap().errors[0].code, 20);
        }
    }

    #[test]
    fn test_classified_code_with_unparseable_body() {
        let error = RestError::from_status(404, Some("Not Found"));
        assert_eq!(error, RestError::UnknownError { code: 404 });
        assert_eq!(error.to_string(), "unknown error for status 404");
    }

    #[test]
    fn test_classified_code_with_empty_error_list() {
        let error = RestError::from_status(422, Some(r#"{"errors":[]}"#));
        assert_eq!(error.to_string(), "unknown error for status 422");
    }

    #[test]
    fn test_classified_code_without_body() {
        let error = RestError::from_status(401, None);
        assert_eq!(error, RestError::UnknownError { code: 401 });
    }

    #[test]
    fn test_server_error_codes_ignore_body() {
        for code in (500..=511).chain([598, 599]) {
            let error = RestError::from_status(code, Some(NOT_FOUND_BODY));
            assert_eq!(
                error.to_string(),
                "something went wrong on our end, please try again",
                "status {code}"
            );
        }
    }

    #[test]
    fn test_other_codes_are_unhandled() {
        for code in [400, 403, 418, 429, 512, 597] {
            let error = RestError::from_status(code, Some(NOT_FOUND_BODY));
            assert_eq!(error, RestError::UnhandledStatus { code });
        }
        assert_eq!(
            RestError::from_status(418, None).to_string(),
            "unhandled status code 418"
        );
    }

    #[test]
    fn test_reads_body_matches_classified_codes() {
        assert!(RestError::reads_body(401));
        assert!(RestError::reads_body(422));
        assert!(!RestError::reads_body(500));
        assert!(!RestError::reads_body(418));
    }

    #[test]
    fn test_multiple_api_errors_are_joined() {
        let body = r#"{"errors":[
            {"code":9,"description":"no (correct) recipients found","parameter":"recipients"},
            {"code":9,"description":"originator is required","parameter":"originator"}
        ]}"#;
        let error = RestError::from_status(422, Some(body));
        assert_eq!(
            error.to_string(),
            "no (correct) recipients found; originator is required"
        );
        let payload = error.api_errors().unwrap();
        assert_eq!(payload.errors[1].parameter.as_deref(), Some("originator"));
    }

    #[test]
    fn test_missing_parameter_field_is_accepted() {
        let payload =
            ApiErrorPayload::from_response(r#"{"errors":[{"code":2,"description":"denied"}]}"#)
                .unwrap();
        assert!(payload.errors[0].parameter.is_none());
    }

    #[test]
    fn test_status_code_accessor() {
        assert_eq!(
            RestError::UnexpectedStatus { code: 204 }.status_code(),
            Some(204)
        );
        assert_eq!(RestError::ServerError.status_code(), None);
        assert_eq!(
            RestError::NotImplemented { operation: "update" }.status_code(),
            None
        );
    }

    #[test]
    fn test_not_implemented_message() {
        let error = RestError::NotImplemented { operation: "delete" };
        assert_eq!(error.to_string(), "delete is not implemented");
    }

    #[test]
    fn test_serde_error_becomes_unhandled() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RestError::from(cause);
        assert!(matches!(error, RestError::Unhandled { .. }));
        assert!(error.to_string().starts_with("unhandled exception: "));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = RestError::ServerError;
        let _: &dyn std::error::Error = &error;
    }
}
