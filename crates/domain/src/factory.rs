//! Packing list factory
//!
//! Builds fully initialised packing lists with a default item set derived
//! from the trip profile by [`PackingItemsPolicy`] rules.

use crate::entities::PackingList;
use crate::policies::{PackingItemsPolicy, PolicyData, default_policies};
use crate::value_objects::{
    Gender, Localization, PackingListId, PackingListName, Temperature, TravelDays,
};

/// Creates packing lists with default items
pub trait PackingListFactory: Send + Sync {
    /// Build a list and fill it with the items every applicable policy contributes
    fn create_with_default_items(
        &self,
        id: PackingListId,
        name: PackingListName,
        days: TravelDays,
        gender: Gender,
        temperature: Temperature,
        localization: Localization,
    ) -> PackingList;
}

/// Factory that evaluates a fixed, ordered set of policies
#[derive(Debug)]
pub struct DefaultPackingListFactory {
    policies: Vec<Box<dyn PackingItemsPolicy>>,
}

impl DefaultPackingListFactory {
    /// Create a factory with the standard policy set
    #[must_use]
    pub fn new() -> Self {
        Self::with_policies(default_policies())
    }

    /// Create a factory with a custom policy set
    #[must_use]
    pub fn with_policies(policies: Vec<Box<dyn PackingItemsPolicy>>) -> Self {
        Self { policies }
    }
}

impl Default for DefaultPackingListFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PackingListFactory for DefaultPackingListFactory {
    fn create_with_default_items(
        &self,
        id: PackingListId,
        name: PackingListName,
        days: TravelDays,
        gender: Gender,
        temperature: Temperature,
        localization: Localization,
    ) -> PackingList {
        let data = PolicyData {
            days,
            gender,
            temperature,
            localization: localization.clone(),
        };

        let mut list = PackingList::new(id, name, days, gender, temperature, localization);
        list.merge_items(
            self.policies
                .iter()
                .filter(|policy| policy.is_applicable(&data))
                .flat_map(|policy| policy.generate_items(&data)),
        );
        list
    }
}
