//! Open-Meteo weather client
//!
//! Resolves a city to coordinates through the geocoding API and reads the
//! current conditions from the forecast API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use moka::future::Cache;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentData, CurrentWeather, ForecastResponse, GeoLocation, GeocodingResponse,
    WeatherCondition,
};

/// Variables requested in the `current` block
const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,wind_speed_10m";

/// Number of geocoding candidates to inspect for a country match
const GEOCODING_CANDIDATES: &str = "10";

/// Upper bound on cached geocoding answers
const GEOCODING_CACHE_CAPACITY: u64 = 1_000;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl WeatherError {
    /// Transient failures worth another attempt
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::ServiceUnavailable(_) | Self::RateLimitExceeded
        )
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Geocoding cache TTL in minutes (default: 60)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_cache_ttl() -> u32 {
    60
}

/// Longest accepted geocoding cache TTL: one year, in minutes
pub const MAX_CACHE_TTL_MINUTES: u32 = 60 * 24 * 365;

impl WeatherConfig {
    /// Geocoding cache TTL, saturated at [`MAX_CACHE_TTL_MINUTES`]
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        let minutes = self.cache_ttl_minutes.min(MAX_CACHE_TTL_MINUTES);
        Duration::from_secs(u64::from(minutes) * 60)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geocoding_url: default_geocoding_url(),
            timeout_secs: default_timeout(),
            cache_ttl_minutes: default_cache_ttl(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a city within a country to coordinates
    ///
    /// `Ok(None)` when no candidate lies in the country.
    async fn geocode(&self, city: &str, country: &str)
    -> Result<Option<GeoLocation>, WeatherError>;

    /// Get current weather at a coordinate
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError>;
}

/// Open-Meteo HTTP client implementation
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
    geocode_cache: Cache<String, Option<GeoLocation>>,
}

impl std::fmt::Debug for OpenMeteoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoClient")
            .field("config", &self.config)
            .field("cached_places", &self.geocode_cache.entry_count())
            .finish_non_exhaustive()
    }
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        let geocode_cache = Cache::builder()
            .max_capacity(GEOCODING_CACHE_CAPACITY)
            .time_to_live(config.cache_ttl())
            .build();

        Ok(Self {
            client,
            config,
            geocode_cache,
        })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn cache_key(city: &str, country: &str) -> String {
        format!(
            "{}|{}",
            city.trim().to_lowercase(),
            country.trim().to_lowercase()
        )
    }

    /// Map a response status to an error and decode the body
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, WeatherError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn request_error(e: &reqwest::Error) -> WeatherError {
        if e.is_connect() || e.is_timeout() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    async fn fetch_geocode(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Option<GeoLocation>, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_url);
        debug!(url = %url, %city, "Geocoding city");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", city.trim()),
                ("count", GEOCODING_CANDIDATES),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| Self::request_error(&e))?;

        let body: GeocodingResponse = Self::decode(response).await?;

        Ok(body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeoLocation::from)
            .find(|place| place.is_in_country(country)))
    }

    fn parse_current_weather(data: CurrentData) -> Result<CurrentWeather, WeatherError> {
        Ok(CurrentWeather {
            time: Self::parse_datetime(&data.time)?,
            temperature: data.temperature_2m,
            apparent_temperature: data.apparent_temperature,
            humidity: data.relative_humidity_2m,
            condition: data
                .weather_code
                .map_or(WeatherCondition::Unknown, WeatherCondition::from_wmo_code),
            wind_speed: data.wind_speed_10m,
        })
    }

    /// Parse the API's local ISO timestamps (`2026-02-05T14:00`)
    fn parse_datetime(s: &str) -> Result<DateTime<Utc>, WeatherError> {
        ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| Utc.from_utc_datetime(&dt))
            .or_else(|| {
                DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            })
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid datetime format: {s}")))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn geocode(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Option<GeoLocation>, WeatherError> {
        let key = Self::cache_key(city, country);
        if let Some(cached) = self.geocode_cache.get(&key).await {
            debug!("Geocoding cache hit");
            return Ok(cached);
        }

        let place = self.fetch_geocode(city, country).await?;
        self.geocode_cache.insert(key, place.clone()).await;
        Ok(place)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Self::request_error(&e))?;

        let body: ForecastResponse = Self::decode(response).await?;
        let current = body.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        Self::parse_current_weather(current)
    }
}
