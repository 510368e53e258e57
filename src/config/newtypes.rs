//! Newtype wrappers for configuration values.

use std::fmt;

/// A MessageBird access key.
///
/// The key is stored as given; an empty or malformed key is only rejected by
/// the API itself (with a 401 response). The `Debug` implementation masks
/// the value so the key never ends up in logs.
///
/// # Example
///
/// ```rust
/// use messagebird_api::AccessKey;
///
/// let key = AccessKey::new("test_gshuPaZoeEG6ovbc8M79w0QyM");
/// assert_eq!(format!("{:?}", key), "AccessKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Creates a new access key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the value of the `Authorization` header for this key.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("AccessKey {}", self.0)
    }
}

impl AsRef<str> for AccessKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(*****)")
    }
}

impl From<&str> for AccessKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AccessKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
