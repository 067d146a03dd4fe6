//! Read-side data transfer objects

use chrono::{DateTime, Utc};
use domain::{Gender, PackingItem, PackingList};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Localization as exposed to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationDto {
    pub city: String,
    pub country: String,
}

/// A single packing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItemDto {
    pub name: String,
    pub quantity: u32,
    pub is_packed: bool,
}

impl From<&PackingItem> for PackingItemDto {
    fn from(item: &PackingItem) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: item.quantity(),
            is_packed: item.is_packed(),
        }
    }
}

/// Flattened view of a packing list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingListDto {
    pub id: Uuid,
    pub name: String,
    pub days: u32,
    pub gender: Gender,
    /// Temperature in Celsius resolved at creation time
    pub temperature: f64,
    pub localization: LocalizationDto,
    pub items: Vec<PackingItemDto>,
    pub created_at: DateTime<Utc>,
}

impl PackingListDto {
    /// Number of packed items
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_packed).count()
    }
}

impl From<&PackingList> for PackingListDto {
    fn from(list: &PackingList) -> Self {
        Self {
            id: list.id().as_uuid(),
            name: list.name().as_str().to_string(),
            days: list.days().value(),
            gender: list.gender(),
            temperature: list.temperature().celsius(),
            localization: LocalizationDto {
                city: list.localization().city().to_string(),
                country: list.localization().country().to_string(),
            },
            items: list.items().iter().map(PackingItemDto::from).collect(),
            created_at: list.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{Localization, PackingListId, PackingListName, Temperature, TravelDays};

    use super::*;

    #[test]
    fn from_packing_list() {
        let mut list = PackingList::new(
            PackingListId::new(),
            PackingListName::new("MyList").unwrap(),
            TravelDays::new(3).unwrap(),
            Gender::Male,
            Temperature::new(30.0).unwrap(),
            Localization::new("Warsaw", "Poland").unwrap(),
        );
        list.add_item(PackingItem::new("Hat", 1).unwrap()).unwrap();
        list.add_item(PackingItem::new("Socks", 3).unwrap()).unwrap();
        list.pack_item("Hat").unwrap();

        let dto = PackingListDto::from(&list);
        assert_eq!(dto.id, list.id().as_uuid());
        assert_eq!(dto.name, "MyList");
        assert_eq!(dto.days, 3);
        assert!((dto.temperature - 30.0).abs() < f64::EPSILON);
        assert_eq!(dto.localization.city, "Warsaw");
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[1].quantity, 3);
        assert_eq!(dto.packed_count(), 1);
    }
}
