//! Open-Meteo data models
//!
//! Public types returned by the client plus the raw wire shapes of the
//! geocoding and forecast endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse sky condition derived from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a WMO code (<https://open-meteo.com/en/docs>) to a condition
    #[must_use]
    pub const fn from_wmo_code(code: u8) -> Self {
        match code {
            0 | 1 => Self::Clear,
            2 | 3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51..=57 => Self::Drizzle,
            61..=67 | 80..=82 => Self::Rain,
            71..=77 | 85 | 86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A place resolved by the geocoding API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Place name as returned by the API
    pub name: String,
    /// Country name, if reported
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code, if reported
    pub country_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// Check whether this place lies in the given country
    ///
    /// Matches the country name or its two-letter code, ignoring case.
    #[must_use]
    pub fn is_in_country(&self, country: &str) -> bool {
        let country = country.trim();
        [self.country.as_deref(), self.country_code.as_deref()]
            .into_iter()
            .flatten()
            .any(|c| c.eq_ignore_ascii_case(country))
    }
}

/// Current conditions at a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time
    pub time: DateTime<Utc>,
    /// Air temperature at 2 m in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub apparent_temperature: Option<f64>,
    /// Relative humidity percentage
    pub humidity: Option<u8>,
    pub condition: WeatherCondition,
    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
}

/// Raw geocoding response; `results` is absent when nothing matched
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl From<GeocodingResult> for GeoLocation {
    fn from(r: GeocodingResult) -> Self {
        Self {
            name: r.name,
            country: r.country,
            country_code: r.country_code,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

/// Raw `current` block of a forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<u8>,
    #[serde(default)]
    pub weather_code: Option<u8>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
}

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wmo_codes_map_to_conditions() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(3), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_wmo_code(55), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_wmo_code(81), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_wmo_code(86), WeatherCondition::Snow);
        assert_eq!(
            WeatherCondition::from_wmo_code(99),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_wmo_code(200), WeatherCondition::Unknown);
    }

    #[test]
    fn country_match_by_name_or_code() {
        let warsaw = GeoLocation {
            name: "Warsaw".into(),
            country: Some("Poland".into()),
            country_code: Some("PL".into()),
            latitude: 52.23,
            longitude: 21.01,
        };
        assert!(warsaw.is_in_country("poland"));
        assert!(warsaw.is_in_country(" pl "));
        assert!(!warsaw.is_in_country("Germany"));
    }

    #[test]
    fn geocoding_without_results() {
        let raw: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(raw.results.is_none());
    }

    #[test]
    fn forecast_current_block() {
        let raw: ForecastResponse = serde_json::from_str(
            r#"{"current": {"time": "2024-01-15T12:00", "temperature_2m": 5.5, "weather_code": 3}}"#,
        )
        .unwrap();
        let current = raw.current.unwrap();
        assert!((current.temperature_2m - 5.5).abs() < f64::EPSILON);
        assert_eq!(current.weather_code, Some(3));
        assert!(current.relative_humidity_2m.is_none());
    }
}
