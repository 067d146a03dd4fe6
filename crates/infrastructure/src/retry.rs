//! Retry with exponential backoff and jitter
//!
//! Used at adapter boundaries for calls to flaky remote services. Handlers
//! never retry.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Backoff settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Delay before the first retry in milliseconds (default: 100)
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Cap on any single delay in milliseconds (default: 5000)
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Growth factor between attempts (default: 2.0)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Retries after the first attempt (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Relative jitter applied to each delay, 0.0 disables it (default: 0.1)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

const fn default_initial_delay() -> u64 {
    100
}

const fn default_max_delay() -> u64 {
    5_000
}

const fn default_multiplier() -> f64 {
    2.0
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_jitter_factor() -> f64 {
    0.1
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            multiplier: default_multiplier(),
            max_retries: default_max_retries(),
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    /// A config that fails after the first attempt
    #[must_use]
    pub fn no_retries() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn without_jitter(mut self) -> Self {
        self.jitter_factor = 0.0;
        self
    }

    /// Check that the backoff settings describe a growing, non-negative delay
    ///
    /// # Errors
    ///
    /// Returns a description of the first field out of range.
    pub fn validate(&self) -> Result<(), String> {
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(format!(
                "retry.multiplier must be a finite number of at least 1.0, got {}",
                self.multiplier
            ));
        }
        if !(0.0..=1.0).contains(&self.jitter_factor) {
            return Err(format!(
                "retry.jitter_factor must be between 0.0 and 1.0, got {}",
                self.jitter_factor
            ));
        }
        Ok(())
    }

    /// Delay before retry number `attempt` (0-indexed)
    ///
    /// `initial_delay * multiplier^attempt`, kept within `0..=max_delay`, then
    /// shifted by up to `±jitter_factor` of itself. Settings rejected by
    /// [`RetryConfig::validate`] still yield a delay in that range.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let max_delay = self.max_delay_ms as f64;
        let exponent = attempt.min(i32::MAX as u32) as i32;
        let base = (self.initial_delay_ms as f64) * self.multiplier.powi(exponent);
        let capped = if base.is_nan() {
            max_delay
        } else {
            base.clamp(0.0, max_delay)
        };

        let delay = if self.jitter_factor > 0.0 && capped > 0.0 {
            let spread = capped * self.jitter_factor.min(1.0);
            (capped + rand::rng().random_range(-spread..=spread)).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(delay as u64)
    }
}

/// Errors that know whether another attempt may succeed
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for application::ApplicationError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

impl Retryable for integration_weather::WeatherError {
    fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}

/// Run `operation` until it succeeds, fails permanently or runs out of retries
///
/// Returns the last error when giving up.
pub async fn retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retries");
                }
                return Ok(value);
            },
            Err(err) if !err.is_retryable() => {
                debug!(error = %err, "Operation failed with non-retryable error");
                return Err(err);
            },
            Err(err) if attempt >= config.max_retries => {
                warn!(
                    attempts = attempt + 1,
                    error = %err,
                    "Operation failed after max retries"
                );
                return Err(err);
            },
            Err(err) => {
                let delay = config.delay_for_attempt(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            },
        }
    }
}
