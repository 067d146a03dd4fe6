//! Default-item policies
//!
//! Each policy looks at the trip profile and, when applicable, contributes
//! a group of items. The default factory evaluates them in order.

mod basic;
mod gender;
mod temperature;

pub use basic::BasicPolicy;
pub use gender::{FemaleGenderPolicy, MaleGenderPolicy};
pub use temperature::{HighTemperaturePolicy, LowTemperaturePolicy};

use crate::value_objects::{Gender, Localization, PackingItem, Temperature, TravelDays};

/// Trip profile handed to every policy
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyData {
    pub days: TravelDays,
    pub gender: Gender,
    pub temperature: Temperature,
    pub localization: Localization,
}

/// A rule that derives default items from a trip profile
pub trait PackingItemsPolicy: Send + Sync + std::fmt::Debug {
    /// Whether this policy contributes items for the given trip
    fn is_applicable(&self, data: &PolicyData) -> bool;

    /// The items this policy contributes
    fn generate_items(&self, data: &PolicyData) -> Vec<PackingItem>;
}

/// The standard policy set in evaluation order
#[must_use]
pub fn default_policies() -> Vec<Box<dyn PackingItemsPolicy>> {
    vec![
        Box::new(BasicPolicy),
        Box::new(FemaleGenderPolicy),
        Box::new(MaleGenderPolicy),
        Box::new(HighTemperaturePolicy),
        Box::new(LowTemperaturePolicy),
    ]
}

fn single_items(names: &[&str]) -> Vec<PackingItem> {
    names
        .iter()
        .map(|name| PackingItem::unchecked(name, 1))
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_data(days: u32, gender: Gender, celsius: f64) -> PolicyData {
    PolicyData {
        days: TravelDays::new(days).unwrap(),
        gender,
        temperature: Temperature::new(celsius).unwrap(),
        localization: Localization::new("Warsaw", "Poland").unwrap(),
    }
}
