//! Commands - write-side requests handled by the command handlers
//!
//! Commands carry raw input. Handlers validate them into domain value
//! objects before touching any collaborator.

use domain::Gender;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// City and country as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationWriteModel {
    pub city: String,
    pub country: String,
}

impl LocalizationWriteModel {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

/// Create a packing list pre-filled with default items for the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePackingListWithItems {
    pub id: Uuid,
    pub name: String,
    pub days: u32,
    pub gender: Gender,
    #[serde(default)]
    pub localization: Option<LocalizationWriteModel>,
}

/// Add a single item to an existing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPackingItem {
    pub list_id: Uuid,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// Mark an item as packed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackItem {
    pub list_id: Uuid,
    pub name: String,
}

/// Remove an item from a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePackingItem {
    pub list_id: Uuid,
    pub name: String,
}

/// Delete a whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePackingList {
    pub id: Uuid,
}
