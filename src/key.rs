//! Record keys.
//!
//! Every record in a registry is addressed by exactly one string key,
//! typically a purchase-order number such as `PO-1001`. The key is the
//! stable identity the update operation pivots on: the record is fetched
//! by key and written back under the same key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Non-empty string key addressing one record within a registry.
///
/// Keys are trimmed on construction; an empty or whitespace-only key is
/// rejected with [`ValidationError::EmptyKey`].
///
/// # Examples
///
/// ```
/// use procura::RecordKey;
///
/// let key = RecordKey::new("PO-1001").unwrap();
/// assert_eq!(key.as_str(), "PO-1001");
/// assert!(RecordKey::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordKey(String);

impl RecordKey {
    /// Creates a key from string-like input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyKey`] if the trimmed input is empty.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ValidationError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        Ok(Self(key.to_string()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RecordKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RecordKey {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordKey> for String {
    fn from(key: RecordKey) -> Self {
        key.0
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_trimmed() {
        let key = RecordKey::new("  PO-1001  ").unwrap();
        assert_eq!(key.as_str(), "PO-1001");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(RecordKey::new(""), Err(ValidationError::EmptyKey)));
        assert!(matches!(RecordKey::new("   "), Err(ValidationError::EmptyKey)));
    }

    #[test]
    fn test_key_display() {
        let key = RecordKey::new("PO-1001").unwrap();
        assert_eq!(format!("{key}"), "PO-1001");
    }

    #[test]
    fn test_key_ordering() {
        let a = RecordKey::new("PO-1001").unwrap();
        let b = RecordKey::new("PO-1002").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_key_serde_as_plain_string() {
        let key = RecordKey::new("PO-1001").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"PO-1001\"");

        let decoded: RecordKey = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, key);

        // Deserialization applies the same validation as construction.
        let bad: Result<RecordKey, _> = serde_json::from_str("\" \"");
        assert!(bad.is_err());
    }
}
