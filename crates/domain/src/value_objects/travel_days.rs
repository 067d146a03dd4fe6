//! Travel duration value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Trip duration in days (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TravelDays(u32);

impl TravelDays {
    /// Shortest supported trip
    pub const MIN: u32 = 1;
    /// Longest supported trip
    pub const MAX: u32 = 100;

    /// Create a validated trip duration
    ///
    /// # Errors
    ///
    /// Returns `InvalidTravelDays` outside `1..=100`.
    pub const fn new(days: u32) -> Result<Self, DomainError> {
        if days < Self::MIN || days > Self::MAX {
            return Err(DomainError::InvalidTravelDays(days));
        }
        Ok(Self(days))
    }

    /// Get the number of days
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TravelDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

impl TryFrom<u32> for TravelDays {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TravelDays> for u32 {
    fn from(days: TravelDays) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(TravelDays::new(0).is_err());
        assert!(TravelDays::new(1).is_ok());
        assert!(TravelDays::new(100).is_ok());
        assert_eq!(
            TravelDays::new(101),
            Err(DomainError::InvalidTravelDays(101))
        );
    }

    #[test]
    fn display() {
        assert_eq!(TravelDays::new(1).unwrap().to_string(), "1 day");
        assert_eq!(TravelDays::new(10).unwrap().to_string(), "10 days");
    }

    #[test]
    fn deserialization_validates() {
        let days: TravelDays = serde_json::from_str("10").unwrap();
        assert_eq!(days.value(), 10);
        assert!(serde_json::from_str::<TravelDays>("0").is_err());
    }
}
