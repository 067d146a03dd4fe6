//! Packing list name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A trimmed, non-empty packing list name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackingListName(String);

impl PackingListName {
    /// Maximum length in characters
    pub const MAX_LENGTH: usize = 100;

    /// Create a validated name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or longer than [`Self::MAX_LENGTH`].
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::EmptyPackingListName);
        }
        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::PackingListNameTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackingListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackingListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackingListName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackingListName> for String {
    fn from(name: PackingListName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = PackingListName::new("  Summer in Warsaw ").unwrap();
        assert_eq!(name.as_str(), "Summer in Warsaw");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            PackingListName::new("   "),
            Err(DomainError::EmptyPackingListName)
        );
    }

    #[test]
    fn long_name_is_rejected() {
        let long = "x".repeat(101);
        assert!(matches!(
            PackingListName::new(long),
            Err(DomainError::PackingListNameTooLong { length: 101, .. })
        ));
        assert!(PackingListName::new("x".repeat(100)).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: PackingListName = serde_json::from_str("\"MyList\"").unwrap();
        assert_eq!(ok.as_str(), "MyList");
        assert!(serde_json::from_str::<PackingListName>("\"\"").is_err());
    }
}
