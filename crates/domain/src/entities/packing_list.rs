//! Packing list aggregate - A named trip profile with an ordered set of items

use chrono::{DateTime, Utc};

use crate::errors::DomainError;
use crate::events::PackingListEvent;
use crate::value_objects::{
    Gender, Localization, PackingItem, PackingListId, PackingListName, Temperature, TravelDays,
};

/// A packing list for a single trip
///
/// Items keep insertion order and names are unique within a list.
/// Mutations record [`PackingListEvent`]s that callers drain with
/// [`PackingList::take_events`].
#[derive(Debug, Clone)]
pub struct PackingList {
    id: PackingListId,
    name: PackingListName,
    days: TravelDays,
    gender: Gender,
    temperature: Temperature,
    localization: Localization,
    items: Vec<PackingItem>,
    created_at: DateTime<Utc>,
    events: Vec<PackingListEvent>,
}

impl PackingList {
    /// Create a new, empty packing list
    ///
    /// A temperature is required: a list cannot exist without resolved weather.
    #[must_use]
    pub fn new(
        id: PackingListId,
        name: PackingListName,
        days: TravelDays,
        gender: Gender,
        temperature: Temperature,
        localization: Localization,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id,
            name,
            days,
            gender,
            temperature,
            localization,
            items: Vec::new(),
            created_at,
            events: vec![PackingListEvent::PackingListCreated {
                list_id: id,
                occurred_at: created_at,
            }],
        }
    }

    /// Rebuild a list from storage without recording events
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: PackingListId,
        name: PackingListName,
        days: TravelDays,
        gender: Gender,
        temperature: Temperature,
        localization: Localization,
        items: Vec<PackingItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            days,
            gender,
            temperature,
            localization,
            items,
            created_at,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PackingListId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &PackingListName {
        &self.name
    }

    #[must_use]
    pub const fn days(&self) -> TravelDays {
        self.days
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    #[must_use]
    pub const fn localization(&self) -> &Localization {
        &self.localization
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    /// Look up an item by name, ignoring surrounding whitespace
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&PackingItem> {
        let name = name.trim();
        self.items.iter().find(|i| i.name() == name)
    }

    /// Number of items already packed
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_packed()).count()
    }

    /// Check if every item is packed
    #[must_use]
    pub fn is_fully_packed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(PackingItem::is_packed)
    }

    /// Add a single item
    ///
    /// # Errors
    ///
    /// Returns `PackingItemAlreadyExists` if an item with the same name is
    /// already on the list.
    pub fn add_item(&mut self, item: PackingItem) -> Result<(), DomainError> {
        if self.item(item.name()).is_some() {
            return Err(DomainError::item_already_exists(
                self.name.as_str(),
                item.name(),
            ));
        }
        self.push_item(item);
        Ok(())
    }

    /// Add several items in order, stopping at the first duplicate
    pub fn add_items(
        &mut self,
        items: impl IntoIterator<Item = PackingItem>,
    ) -> Result<(), DomainError> {
        for item in items {
            self.add_item(item)?;
        }
        Ok(())
    }

    /// Add every item whose name is not on the list yet
    ///
    /// Earlier items win over later ones with the same name. Returns how
    /// many items were added.
    pub fn merge_items(&mut self, items: impl IntoIterator<Item = PackingItem>) -> usize {
        let before = self.items.len();
        for item in items {
            if self.item(item.name()).is_none() {
                self.push_item(item);
            }
        }
        self.items.len() - before
    }

    fn push_item(&mut self, item: PackingItem) {
        self.events.push(PackingListEvent::PackingItemAdded {
            list_id: self.id,
            item: item.clone(),
            occurred_at: Utc::now(),
        });
        self.items.push(item);
    }

    /// Mark an item as packed
    ///
    /// # Errors
    ///
    /// Returns `PackingItemNotFound` if no item has this name.
    pub fn pack_item(&mut self, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.name() == name)
            .ok_or_else(|| DomainError::PackingItemNotFound(name.to_string()))?;

        *slot = slot.packed();
        self.events.push(PackingListEvent::PackingItemPacked {
            list_id: self.id,
            item: slot.clone(),
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    /// Remove an item
    ///
    /// # Errors
    ///
    /// Returns `PackingItemNotFound` if no item has this name.
    pub fn remove_item(&mut self, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        let index = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| DomainError::PackingItemNotFound(name.to_string()))?;

        let item = self.items.remove(index);
        self.events.push(PackingListEvent::PackingItemRemoved {
            list_id: self.id,
            item,
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    /// Events recorded since the last drain
    #[must_use]
    pub fn events(&self) -> &[PackingListEvent] {
        &self.events
    }

    /// Drain recorded events
    pub fn take_events(&mut self) -> Vec<PackingListEvent> {
        std::mem::take(&mut self.events)
    }
}

impl std::fmt::Display for PackingList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}) {}/{} packed",
            self.name,
            self.localization,
            self.days,
            self.temperature,
            self.packed_count(),
            self.items.len()
        )
    }
}
