//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Packing list id must not be the nil UUID
    #[error("Packing list id cannot be empty")]
    EmptyPackingListId,

    /// Packing list name is blank
    #[error("Packing list name cannot be empty")]
    EmptyPackingListName,

    /// Packing list name exceeds the maximum length
    #[error("Packing list name is too long: {length} characters (max {max})")]
    PackingListNameTooLong { length: usize, max: usize },

    /// Travel days outside the supported range
    #[error("Invalid travel days: {0} (must be 1-100)")]
    InvalidTravelDays(u32),

    /// Temperature outside the supported range or not a number
    #[error("Invalid temperature: {0} (must be -100 to 100 °C)")]
    InvalidTemperature(f64),

    /// Localization string could not be parsed or has blank parts
    #[error("Invalid localization: {0}")]
    InvalidLocalization(String),

    /// Unknown gender category
    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    /// Packing item name is blank
    #[error("Packing item name cannot be empty")]
    EmptyPackingItemName,

    /// Packing item quantity must be at least one
    #[error("Invalid packing item quantity: {0}")]
    InvalidPackingItemQuantity(u32),

    /// An item with the same name is already on the list
    #[error("Packing item '{item}' already exists on list '{list}'")]
    PackingItemAlreadyExists { list: String, item: String },

    /// No item with the given name is on the list
    #[error("Packing item '{0}' was not found")]
    PackingItemNotFound(String),
}

impl DomainError {
    /// Create a duplicate item error
    pub fn item_already_exists(list: impl Into<String>, item: impl Into<String>) -> Self {
        Self::PackingItemAlreadyExists {
            list: list.into(),
            item: item.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_already_exists_creates_correct_error() {
        let err = DomainError::item_already_exists("Summer", "Hat");
        match err {
            DomainError::PackingItemAlreadyExists { list, item } => {
                assert_eq!(list, "Summer");
                assert_eq!(item, "Hat");
            },
            _ => unreachable!("Expected PackingItemAlreadyExists error"),
        }
    }

    #[test]
    fn item_already_exists_message() {
        let err = DomainError::item_already_exists("Summer", "Hat");
        assert_eq!(
            err.to_string(),
            "Packing item 'Hat' already exists on list 'Summer'"
        );
    }

    #[test]
    fn travel_days_message() {
        let err = DomainError::InvalidTravelDays(0);
        assert_eq!(err.to_string(), "Invalid travel days: 0 (must be 1-100)");
    }

    #[test]
    fn name_too_long_message() {
        let err = DomainError::PackingListNameTooLong {
            length: 120,
            max: 100,
        };
        assert!(err.to_string().contains("120"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn item_not_found_message() {
        let err = DomainError::PackingItemNotFound("Socks".to_string());
        assert_eq!(err.to_string(), "Packing item 'Socks' was not found");
    }
}
