//! Gender-specific items

use super::{PackingItemsPolicy, PolicyData, single_items};
use crate::value_objects::{Gender, PackingItem};

/// Extra items for female travelers
#[derive(Debug, Clone, Copy, Default)]
pub struct FemaleGenderPolicy;

impl PackingItemsPolicy for FemaleGenderPolicy {
    fn is_applicable(&self, data: &PolicyData) -> bool {
        data.gender == Gender::Female
    }

    fn generate_items(&self, _data: &PolicyData) -> Vec<PackingItem> {
        single_items(&["Lipstick", "Powder", "Eyeliner"])
    }
}

/// Extra items for male travelers
#[derive(Debug, Clone, Copy, Default)]
pub struct MaleGenderPolicy;

impl PackingItemsPolicy for MaleGenderPolicy {
    fn is_applicable(&self, data: &PolicyData) -> bool {
        data.gender == Gender::Male
    }

    fn generate_items(&self, _data: &PolicyData) -> Vec<PackingItem> {
        single_items(&["Laptop", "Beer", "Book"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::sample_data;

    #[test]
    fn exactly_one_gender_policy_applies() {
        let female = sample_data(5, Gender::Female, 15.0);
        assert!(FemaleGenderPolicy.is_applicable(&female));
        assert!(!MaleGenderPolicy.is_applicable(&female));

        let male = sample_data(5, Gender::Male, 15.0);
        assert!(MaleGenderPolicy.is_applicable(&male));
        assert!(!FemaleGenderPolicy.is_applicable(&male));
    }

    #[test]
    fn female_items() {
        let items = FemaleGenderPolicy.generate_items(&sample_data(5, Gender::Female, 15.0));
        let names: Vec<_> = items.iter().map(PackingItem::name).collect();
        assert_eq!(names, vec!["Lipstick", "Powder", "Eyeliner"]);
    }
}
