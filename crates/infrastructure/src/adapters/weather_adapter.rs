//! Weather adapter - Implements `WeatherService` using integration_weather
//!
//! Geocodes the localization, then reads the current temperature. Each remote
//! call is retried on transient failures.

use std::sync::Arc;

use application::ApplicationError;
use application::ports::{WeatherDto, WeatherService};
use async_trait::async_trait;
use domain::Localization;
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

use crate::retry::{RetryConfig, retry};

/// Adapter for weather lookups through Open-Meteo
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
    retry: RetryConfig,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Wrap any weather client
    #[must_use]
    pub fn new(client: Arc<dyn WeatherClient>, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Build an Open-Meteo backed adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig, retry: RetryConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client), retry))
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => {
                ApplicationError::ExternalService(format!("unexpected weather response: {e}"))
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("geocoder returned invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherService for WeatherAdapter {
    #[instrument(skip(self), fields(localization = %localization))]
    async fn get_weather(
        &self,
        localization: &Localization,
    ) -> Result<Option<WeatherDto>, ApplicationError> {
        let place = retry(&self.retry, || {
            self.client
                .geocode(localization.city(), localization.country())
        })
        .await
        .map_err(Self::map_error)?;

        let Some(place) = place else {
            debug!("No geocoding match");
            return Ok(None);
        };

        let current = retry(&self.retry, || {
            self.client.get_current(place.latitude, place.longitude)
        })
        .await
        .map_err(Self::map_error)?;

        debug!(
            place = %place.name,
            temperature = current.temperature,
            condition = %current.condition,
            "Resolved current weather"
        );
        Ok(Some(
            WeatherDto::new(current.temperature).with_observed_at(current.time),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use integration_weather::{CurrentWeather, GeoLocation, WeatherCondition};
    use mockall::{Sequence, mock};

    use super::*;

    mock! {
        Client {}

        #[async_trait]
        impl WeatherClient for Client {
            async fn geocode(
                &self,
                city: &str,
                country: &str,
            ) -> Result<Option<GeoLocation>, WeatherError>;
            async fn get_current(
                &self,
                latitude: f64,
                longitude: f64,
            ) -> Result<CurrentWeather, WeatherError>;
        }
    }

    fn warsaw() -> GeoLocation {
        GeoLocation {
            name: "Warsaw".into(),
            country: Some("Poland".into()),
            country_code: Some("PL".into()),
            latitude: 52.23,
            longitude: 21.01,
        }
    }

    fn current(temperature: f64) -> CurrentWeather {
        CurrentWeather {
            time: Utc::now(),
            temperature,
            apparent_temperature: None,
            humidity: None,
            condition: WeatherCondition::Clear,
            wind_speed: None,
        }
    }

    fn localization() -> Localization {
        Localization::new("Warsaw", "Poland").unwrap()
    }

    fn fast_retry() -> RetryConfig {
        RetryConfig {
            initial_delay_ms: 1,
            max_delay_ms: 1,
            ..RetryConfig::default()
        }
    }

    #[tokio::test]
    async fn resolves_temperature() {
        let mut client = MockClient::new();
        client
            .expect_geocode()
            .withf(|city, country| city == "Warsaw" && country == "Poland")
            .times(1)
            .returning(|_, _| Ok(Some(warsaw())));
        client
            .expect_get_current()
            .times(1)
            .returning(|_, _| Ok(current(18.5)));

        let adapter = WeatherAdapter::new(Arc::new(client), fast_retry());
        let weather = adapter.get_weather(&localization()).await.unwrap().unwrap();

        assert!((weather.temperature - 18.5).abs() < f64::EPSILON);
        assert!(weather.observed_at.is_some());
    }

    #[tokio::test]
    async fn unknown_place_is_none() {
        let mut client = MockClient::new();
        client.expect_geocode().returning(|_, _| Ok(None));
        client.expect_get_current().never();

        let adapter = WeatherAdapter::new(Arc::new(client), fast_retry());
        let weather = adapter.get_weather(&localization()).await.unwrap();

        assert!(weather.is_none());
    }

    #[tokio::test]
    async fn transient_failures_are_retried() {
        let mut seq = Sequence::new();
        let mut client = MockClient::new();
        client
            .expect_geocode()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(WeatherError::ServiceUnavailable("HTTP 503".into())));
        client
            .expect_geocode()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(warsaw())));
        client
            .expect_get_current()
            .times(1)
            .returning(|_, _| Ok(current(3.0)));

        let adapter = WeatherAdapter::new(Arc::new(client), fast_retry());
        let weather = adapter.get_weather(&localization()).await.unwrap();

        assert!(weather.is_some());
    }

    #[tokio::test]
    async fn exhausted_retries_surface_as_rate_limited() {
        let mut client = MockClient::new();
        client
            .expect_geocode()
            .times(4)
            .returning(|_, _| Err(WeatherError::RateLimitExceeded));

        let adapter = WeatherAdapter::new(Arc::new(client), fast_retry());
        let result = adapter.get_weather(&localization()).await;

        assert!(matches!(result, Err(ApplicationError::RateLimited)));
    }

    #[tokio::test]
    async fn bad_responses_are_not_retried() {
        let mut client = MockClient::new();
        client
            .expect_geocode()
            .returning(|_, _| Ok(Some(warsaw())));
        client
            .expect_get_current()
            .times(1)
            .returning(|_, _| Err(WeatherError::ParseError("no current block".into())));

        let adapter = WeatherAdapter::new(Arc::new(client), fast_retry());
        let result = adapter.get_weather(&localization()).await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[test]
    fn error_mapping() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ConnectionFailed("refused".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::InvalidCoordinates),
            ApplicationError::Internal(_)
        ));
    }

    #[test]
    fn with_config_builds_open_meteo_client() {
        let adapter =
            WeatherAdapter::with_config(WeatherConfig::default(), RetryConfig::default());
        assert!(adapter.is_ok());
    }
}
