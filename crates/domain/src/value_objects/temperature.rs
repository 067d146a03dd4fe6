//! Temperature value object
//!
//! Represents a resolved air temperature in degrees Celsius.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Temperature;
//!
//! let t = Temperature::new(12.0).expect("valid temperature");
//! assert_eq!(t.celsius(), 12.0);
//! assert!(Temperature::new(150.0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Air temperature in degrees Celsius (-100 to 100)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Temperature(f64);

impl Temperature {
    /// Lowest accepted value
    pub const MIN: f64 = -100.0;
    /// Highest accepted value
    pub const MAX: f64 = 100.0;

    /// Create a validated temperature
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemperature` for NaN, infinities and values outside
    /// `-100..=100`.
    pub fn new(celsius: f64) -> Result<Self, DomainError> {
        if !celsius.is_finite() || !(Self::MIN..=Self::MAX).contains(&celsius) {
            return Err(DomainError::InvalidTemperature(celsius));
        }
        Ok(Self(celsius))
    }

    /// Get the value in degrees Celsius
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// Check if the temperature calls for summer gear (> 25 °C)
    #[must_use]
    pub fn is_high(self) -> bool {
        self.0 > 25.0
    }

    /// Check if the temperature calls for winter gear (< 10 °C)
    #[must_use]
    pub fn is_low(self) -> bool {
        self.0 < 10.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

/// Custom deserialization that validates the range
impl<'de> Deserialize<'de> for Temperature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        assert!(Temperature::new(-100.0).is_ok());
        assert!(Temperature::new(0.0).is_ok());
        assert!(Temperature::new(100.0).is_ok());
    }

    #[test]
    fn invalid_values() {
        assert!(Temperature::new(-100.1).is_err());
        assert!(Temperature::new(100.1).is_err());
        assert!(Temperature::new(f64::NAN).is_err());
        assert!(Temperature::new(f64::INFINITY).is_err());
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(Temperature::new(12.0).unwrap(), Temperature::new(12.0).unwrap());
        assert_ne!(Temperature::new(12.0).unwrap(), Temperature::new(12.5).unwrap());
    }

    #[test]
    fn thresholds() {
        assert!(Temperature::new(25.1).unwrap().is_high());
        assert!(!Temperature::new(25.0).unwrap().is_high());
        assert!(Temperature::new(9.9).unwrap().is_low());
        assert!(!Temperature::new(10.0).unwrap().is_low());
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::new(12.0).unwrap().to_string(), "12.0°C");
        assert_eq!(Temperature::new(-3.25).unwrap().to_string(), "-3.2°C");
    }

    #[test]
    fn deserialization() {
        let t: Temperature = serde_json::from_str("21.5").unwrap();
        assert!((t.celsius() - 21.5).abs() < f64::EPSILON);
        assert!(serde_json::from_str::<Temperature>("200").is_err());
    }
}
