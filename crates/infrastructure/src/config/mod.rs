//! Application configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `packit.toml` in the working directory, or an explicit file
//! 3. environment variables prefixed `PACKIT`, nested with `__`
//!    (e.g. `PACKIT__DATABASE__PATH=/tmp/packit.db`)

mod database;
mod logging;

use std::{fmt, path::Path, time::Duration};

use integration_weather::{MAX_CACHE_TTL_MINUTES, WeatherConfig};
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use logging::LoggingConfig;

use crate::retry::RetryConfig;

/// Default configuration file name, without extension
pub const DEFAULT_CONFIG_FILE: &str = "packit";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PACKIT";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Command handler settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Upper bound on the weather lookup during list creation (default: 10)
    #[serde(default = "default_weather_timeout")]
    pub weather_timeout_secs: u64,
}

const fn default_weather_timeout() -> u64 {
    10
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            weather_timeout_secs: default_weather_timeout(),
        }
    }
}

impl HandlerConfig {
    #[must_use]
    pub const fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_timeout_secs)
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Open-Meteo endpoints, timeout and geocoding cache
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Backoff for weather calls
    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub handler: HandlerConfig,
}

impl AppConfig {
    /// Load configuration from `packit.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()
            .and_then(|config| config.validate().map(|()| config))
    }

    /// Reject values that would break the weather lookup at runtime
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.retry.validate().map_err(config::ConfigError::Message)?;

        if self.weather.cache_ttl_minutes > MAX_CACHE_TTL_MINUTES {
            return Err(config::ConfigError::Message(format!(
                "weather.cache_ttl_minutes must be at most {MAX_CACHE_TTL_MINUTES}, got {}",
                self.weather.cache_ttl_minutes
            )));
        }
        Ok(())
    }
}
