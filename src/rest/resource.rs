//! Resource trait for MessageBird API entities.
//!
//! This module defines the [`Resource`] trait, the only view the
//! [`RestClient`](crate::clients::RestClient) has of an API entity: where it
//! lives, whether it has been persisted, and how it moves to and from JSON.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use messagebird_api::{Resource, RestError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! pub struct Message {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub originator: String,
//!     pub body: String,
//!     pub recipients: Vec<u64>,
//! }
//!
//! impl Resource for Message {
//!     fn name(&self) -> &str {
//!         "messages"
//!     }
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//!
//!     fn serialize(&self) -> Result<String, RestError> {
//!         Ok(serde_json::to_string(self)?)
//!     }
//!
//!     fn deserialize(&mut self, body: &str) -> Result<(), RestError> {
//!         *self = serde_json::from_str(body)?;
//!         Ok(())
//!     }
//! }
//!
//! let message = Message { id: Some("abc".to_string()), ..Message::default() };
//! assert_eq!(message.request_path(), "messages/abc");
//! ```

use crate::clients::rest::RestError;

/// An entity of the MessageBird REST API.
///
/// The client never looks past this trait: it reads the collection name and
/// id to build the request path, serializes the resource for `create`, and
/// hands successful response bodies back to [`Resource::deserialize`].
pub trait Resource {
    /// The collection path segment of this resource (e.g. `"messages"`).
    fn name(&self) -> &str;

    /// The identifier assigned by the API, once the resource is persisted.
    fn id(&self) -> Option<&str>;

    /// Returns `true` when the resource carries a non-empty id.
    fn has_id(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }

    /// Serializes the resource into a request body.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] if the resource cannot be serialized.
    fn serialize(&self) -> Result<String, RestError>;

    /// Updates the resource in place from a response body.
    ///
    /// # Errors
    ///
    /// Returns a [`RestError`] if the body does not describe this resource.
    fn deserialize(&mut self, body: &str) -> Result<(), RestError>;

    /// Returns the request path: `{name}/{id}` when the resource has an id,
    /// `{name}` otherwise.
    fn request_path(&self) -> String {
        match self.id() {
            Some(id) if self.has_id() => format!("{}/{id}", self.name()),
            _ => self.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Balance {
        id: Option<String>,
        amount: String,
    }

    impl Resource for Balance {
        fn name(&self) -> &str {
            "balance"
        }

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn serialize(&self) -> Result<String, RestError> {
            Ok(serde_json::json!({ "amount": self.amount }).to_string())
        }

        fn deserialize(&mut self, body: &str) -> Result<(), RestError> {
            let value: serde_json::Value = serde_json::from_str(body)?;
            self.amount = value["amount"].as_str().unwrap_or_default().to_string();
            Ok(())
        }
    }

    fn balance(id: Option<&str>) -> Balance {
        Balance {
            id: id.map(ToString::to_string),
            amount: String::new(),
        }
    }

    #[test]
    fn test_request_path_without_id() {
        let resource = balance(None);
        assert!(!resource.has_id());
        assert_eq!(resource.request_path(), "balance");
    }

    #[test]
    fn test_request_path_with_id() {
        let resource = balance(Some("123"));
        assert!(resource.has_id());
        assert_eq!(resource.request_path(), "balance/123");
    }

    #[test]
    fn test_empty_id_counts_as_no_id() {
        let resource = balance(Some(""));
        assert!(!resource.has_id());
        assert_eq!(resource.request_path(), "balance");
    }

    #[test]
    fn test_deserialize_mutates_in_place() {
        let mut resource = balance(None);
        resource.deserialize(r#"{"amount":"9.5"}"#).unwrap();
        assert_eq!(resource.amount, "9.5");
    }

    #[test]
    fn test_deserialize_failure_is_unhandled() {
        let mut resource = balance(None);
        let error = resource.deserialize("not json").unwrap_err();
        assert!(matches!(error, RestError::Unhandled { .. }));
    }
}
