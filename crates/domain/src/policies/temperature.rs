//! Weather-driven items

use super::{PackingItemsPolicy, PolicyData, single_items};
use crate::value_objects::PackingItem;

/// Summer gear for trips above 25 °C
#[derive(Debug, Clone, Copy, Default)]
pub struct HighTemperaturePolicy;

impl PackingItemsPolicy for HighTemperaturePolicy {
    fn is_applicable(&self, data: &PolicyData) -> bool {
        data.temperature.is_high()
    }

    fn generate_items(&self, _data: &PolicyData) -> Vec<PackingItem> {
        single_items(&["Hat", "Sunglasses", "Cream with UV filter"])
    }
}

/// Winter gear for trips below 10 °C
#[derive(Debug, Clone, Copy, Default)]
pub struct LowTemperaturePolicy;

impl PackingItemsPolicy for LowTemperaturePolicy {
    fn is_applicable(&self, data: &PolicyData) -> bool {
        data.temperature.is_low()
    }

    fn generate_items(&self, _data: &PolicyData) -> Vec<PackingItem> {
        single_items(&["Winter hat", "Scarf", "Gloves", "Hoodie", "Warm jacket"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::sample_data;
    use crate::value_objects::Gender;

    #[test]
    fn mild_weather_needs_neither() {
        let data = sample_data(5, Gender::Male, 12.0);
        assert!(!HighTemperaturePolicy.is_applicable(&data));
        assert!(!LowTemperaturePolicy.is_applicable(&data));
    }

    #[test]
    fn hot_weather() {
        let data = sample_data(5, Gender::Male, 30.0);
        assert!(HighTemperaturePolicy.is_applicable(&data));
        assert_eq!(HighTemperaturePolicy.generate_items(&data).len(), 3);
    }

    #[test]
    fn cold_weather() {
        let data = sample_data(5, Gender::Male, -5.0);
        assert!(LowTemperaturePolicy.is_applicable(&data));
        assert_eq!(LowTemperaturePolicy.generate_items(&data).len(), 5);
    }
}
