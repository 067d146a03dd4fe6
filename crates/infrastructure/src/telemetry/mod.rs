//! Logging setup
//!
//! `RUST_LOG` wins over the configured filter; CLI verbosity raises the
//! configured filter when `RUST_LOG` is unset.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Logging initialisation errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Filter directive for a CLI verbosity count
///
/// 0 keeps the configured filter, 1 is `debug`, 2 or more is `trace`.
#[must_use]
pub fn filter_for_verbosity(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(config: &LoggingConfig, verbosity: u8) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = filter_for_verbosity(&config.filter, verbosity);
    EnvFilter::try_new(&directive).map_err(|e| TelemetryError::InvalidFilter {
        filter: directive,
        reason: e.to_string(),
    })
}

/// Install the global subscriber
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config, verbosity)?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_filter() {
        assert_eq!(filter_for_verbosity("warn", 0), "warn");
        assert_eq!(filter_for_verbosity("warn", 1), "debug");
        assert_eq!(filter_for_verbosity("warn", 5), "trace");
    }

    #[test]
    fn invalid_filter_is_reported() {
        let config = LoggingConfig {
            filter: "packit=loudest".to_string(),
            json: false,
        };
        // RUST_LOG in the test environment would bypass the configured filter
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(
                build_filter(&config, 0),
                Err(TelemetryError::InvalidFilter { .. })
            ));
        }
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config, 0);
        let second = init_logging(&config, 0);
        assert!(second.is_err());
    }
}
