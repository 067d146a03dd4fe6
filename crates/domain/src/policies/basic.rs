//! Items every traveler needs

use super::{PackingItemsPolicy, PolicyData, single_items};
use crate::value_objects::PackingItem;

/// Clothes cap per item
const MAX_CLOTHES: u32 = 7;
/// Trousers cap
const MAX_TROUSERS: u32 = 3;

const CLOTHES: [&str; 3] = ["Pants", "Socks", "T-Shirt"];
const ESSENTIALS: [&str; 7] = [
    "Shampoo",
    "Toothbrush",
    "Toothpaste",
    "Towel",
    "Bag pack",
    "Passport",
    "Phone charger",
];

/// Applies to every trip
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPolicy;

impl PackingItemsPolicy for BasicPolicy {
    fn is_applicable(&self, _data: &PolicyData) -> bool {
        true
    }

    fn generate_items(&self, data: &PolicyData) -> Vec<PackingItem> {
        let days = data.days.value();
        let clothes = days.min(MAX_CLOTHES);
        let trousers = days.div_ceil(7).clamp(1, MAX_TROUSERS);

        let mut items: Vec<PackingItem> = CLOTHES
            .iter()
            .map(|name| PackingItem::unchecked(name, clothes))
            .collect();
        items.push(PackingItem::unchecked("Trousers", trousers));
        items.extend(single_items(&ESSENTIALS));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::sample_data;
    use crate::value_objects::Gender;

    fn quantity_of(items: &[PackingItem], name: &str) -> u32 {
        items
            .iter()
            .find(|i| i.name() == name)
            .map_or(0, PackingItem::quantity)
    }

    #[test]
    fn always_applicable() {
        assert!(BasicPolicy.is_applicable(&sample_data(1, Gender::Male, 40.0)));
        assert!(BasicPolicy.is_applicable(&sample_data(100, Gender::Female, -40.0)));
    }

    #[test]
    fn clothes_scale_with_days_up_to_a_week() {
        let short = BasicPolicy.generate_items(&sample_data(3, Gender::Male, 15.0));
        assert_eq!(quantity_of(&short, "Socks"), 3);

        let long = BasicPolicy.generate_items(&sample_data(10, Gender::Male, 15.0));
        assert_eq!(quantity_of(&long, "Socks"), 7);
        assert_eq!(quantity_of(&long, "Pants"), 7);
        assert_eq!(quantity_of(&long, "T-Shirt"), 7);
    }

    #[test]
    fn trousers_per_started_week() {
        let one = BasicPolicy.generate_items(&sample_data(1, Gender::Male, 15.0));
        assert_eq!(quantity_of(&one, "Trousers"), 1);

        let ten = BasicPolicy.generate_items(&sample_data(10, Gender::Male, 15.0));
        assert_eq!(quantity_of(&ten, "Trousers"), 2);

        let long = BasicPolicy.generate_items(&sample_data(60, Gender::Male, 15.0));
        assert_eq!(quantity_of(&long, "Trousers"), 3);
    }

    #[test]
    fn essentials_are_single() {
        let items = BasicPolicy.generate_items(&sample_data(10, Gender::Female, 15.0));
        assert_eq!(items.len(), 11);
        assert_eq!(quantity_of(&items, "Passport"), 1);
        assert_eq!(quantity_of(&items, "Phone charger"), 1);
    }
}
