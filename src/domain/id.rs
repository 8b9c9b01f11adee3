//! Submitter identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque submitter identity.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Identities are compared byte-for-byte; no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitterId(String);

impl SubmitterId {
    /// Create a new `SubmitterId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identity is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SubmitterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SubmitterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitter_id_new_and_as_str() {
        let id = SubmitterId::new("0xabc");
        assert_eq!(id.as_str(), "0xabc");
    }

    #[test]
    fn submitter_id_display() {
        let id = SubmitterId::from("alice");
        assert_eq!(format!("{id}"), "alice");
    }

    #[test]
    fn submitter_ids_compare_exactly() {
        assert_ne!(SubmitterId::from("Alice"), SubmitterId::from("alice"));
        assert_eq!(SubmitterId::from("bob".to_string()), SubmitterId::from("bob"));
    }

    #[test]
    fn submitter_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SubmitterId::from("carol")).unwrap();
        assert_eq!(json, "\"carol\"");
    }
}
