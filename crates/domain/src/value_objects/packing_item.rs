//! Packing item value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A single item on a packing list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPackingItem")]
pub struct PackingItem {
    name: String,
    quantity: u32,
    is_packed: bool,
}

impl PackingItem {
    /// Create an unpacked item
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or a zero quantity.
    pub fn new(name: impl AsRef<str>, quantity: u32) -> Result<Self, DomainError> {
        Self::with_packed(name, quantity, false)
    }

    /// Create an item with an explicit packed flag (used when reconstituting)
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or a zero quantity.
    pub fn with_packed(
        name: impl AsRef<str>,
        quantity: u32,
        is_packed: bool,
    ) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::EmptyPackingItemName);
        }
        if quantity == 0 {
            return Err(DomainError::InvalidPackingItemQuantity(quantity));
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            is_packed,
        })
    }

    /// Build an item from a trusted constant name and a non-zero quantity
    pub(crate) fn unchecked(name: &str, quantity: u32) -> Self {
        debug_assert!(!name.trim().is_empty() && quantity > 0);
        Self {
            name: name.to_string(),
            quantity,
            is_packed: false,
        }
    }

    /// Item name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many of this item to pack
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the item has been packed
    #[must_use]
    pub const fn is_packed(&self) -> bool {
        self.is_packed
    }

    /// Return a packed copy of this item
    #[must_use]
    pub fn packed(&self) -> Self {
        Self {
            is_packed: true,
            ..self.clone()
        }
    }
}

/// Unvalidated wire form of [`PackingItem`]
#[derive(Deserialize)]
struct RawPackingItem {
    name: String,
    quantity: u32,
    #[serde(default)]
    is_packed: bool,
}

impl TryFrom<RawPackingItem> for PackingItem {
    type Error = DomainError;

    fn try_from(raw: RawPackingItem) -> Result<Self, Self::Error> {
        Self::with_packed(raw.name, raw.quantity, raw.is_packed)
    }
}

impl fmt::Display for PackingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_packed { "x" } else { " " };
        write!(f, "[{mark}] {} x{}", self.name, self.quantity)
    }
}
