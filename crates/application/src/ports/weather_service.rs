//! Weather service port
//!
//! Defines the interface for resolving the weather at a trip destination.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::Localization;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Weather reading for a localization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDto {
    /// Temperature in Celsius
    pub temperature: f64,
    /// When this data was observed, if the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherDto {
    /// Create a reading with only a temperature
    #[must_use]
    pub const fn new(temperature: f64) -> Self {
        Self {
            temperature,
            observed_at: None,
        }
    }

    /// Attach the observation time
    #[must_use]
    pub const fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }
}

/// Port for weather lookups
///
/// `Ok(None)` means the provider has no data for the localization. Transport
/// failures are errors, never `None`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Get the current weather at a localization
    async fn get_weather(
        &self,
        localization: &Localization,
    ) -> Result<Option<WeatherDto>, ApplicationError>;
}
