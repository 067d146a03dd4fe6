//! Domain events recorded by the packing list aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PackingItem, PackingListId};

/// Something that happened to a packing list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PackingListEvent {
    /// A new list was created
    PackingListCreated {
        list_id: PackingListId,
        occurred_at: DateTime<Utc>,
    },
    /// An item was added to the list
    PackingItemAdded {
        list_id: PackingListId,
        item: PackingItem,
        occurred_at: DateTime<Utc>,
    },
    /// An item was marked as packed
    PackingItemPacked {
        list_id: PackingListId,
        item: PackingItem,
        occurred_at: DateTime<Utc>,
    },
    /// An item was taken off the list
    PackingItemRemoved {
        list_id: PackingListId,
        item: PackingItem,
        occurred_at: DateTime<Utc>,
    },
}

impl PackingListEvent {
    /// The list this event belongs to
    #[must_use]
    pub const fn list_id(&self) -> PackingListId {
        match self {
            Self::PackingListCreated { list_id, .. }
            | Self::PackingItemAdded { list_id, .. }
            | Self::PackingItemPacked { list_id, .. }
            | Self::PackingItemRemoved { list_id, .. } => *list_id,
        }
    }

    /// Short event name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PackingListCreated { .. } => "packing_list_created",
            Self::PackingItemAdded { .. } => "packing_item_added",
            Self::PackingItemPacked { .. } => "packing_item_packed",
            Self::PackingItemRemoved { .. } => "packing_item_removed",
        }
    }
}
