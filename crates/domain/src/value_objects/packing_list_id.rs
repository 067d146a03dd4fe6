//! Packing list identifier

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// A unique packing list identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackingListId(Uuid);

impl PackingListId {
    /// Create a new random packing list ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a packing list ID from an existing UUID
    ///
    /// # Errors
    ///
    /// Returns `EmptyPackingListId` for the nil UUID.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, DomainError> {
        if uuid.is_nil() {
            return Err(DomainError::EmptyPackingListId);
        }
        Ok(Self(uuid))
    }

    /// Parse a packing list ID from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid, non-nil UUID.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let uuid = Uuid::parse_str(s.trim()).map_err(|_| DomainError::EmptyPackingListId)?;
        Self::from_uuid(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PackingListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PackingListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Uuid> for PackingListId {
    type Error = DomainError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(uuid)
    }
}

impl From<PackingListId> for Uuid {
    fn from(id: PackingListId) -> Self {
        id.0
    }
}
