//! Localization value object
//!
//! A city/country pair used as the weather lookup key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Trip destination as a city and country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocalization")]
pub struct Localization {
    city: String,
    country: String,
}

impl Localization {
    /// Create a validated localization
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocalization` if either part is blank.
    pub fn new(city: impl AsRef<str>, country: impl AsRef<str>) -> Result<Self, DomainError> {
        let city = city.as_ref().trim();
        let country = country.as_ref().trim();
        if city.is_empty() || country.is_empty() {
            return Err(DomainError::InvalidLocalization(format!(
                "city and country are required (got '{city}', '{country}')"
            )));
        }
        Ok(Self {
            city: city.to_string(),
            country: country.to_string(),
        })
    }

    /// City name
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Country name
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[derive(Deserialize)]
struct RawLocalization {
    city: String,
    country: String,
}

impl TryFrom<RawLocalization> for Localization {
    type Error = DomainError;

    fn try_from(raw: RawLocalization) -> Result<Self, Self::Error> {
        Self::new(raw.city, raw.country)
    }
}

/// Parses `"City,Country"`
impl FromStr for Localization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (city, country) = s
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidLocalization(s.to_string()))?;
        Self::new(city, country)
    }
}
