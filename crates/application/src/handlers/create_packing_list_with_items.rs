//! Create a packing list pre-filled with default items
//!
//! Flow: validate input, check the name is free, resolve the weather at the
//! destination, build the list through the factory and persist it once.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use domain::{
    Localization, PackingListFactory, PackingListId, PackingListName, Temperature, TravelDays,
};
use tracing::{debug, info, instrument, warn};

use super::{CommandHandler, log_events};
use crate::commands::CreatePackingListWithItems;
use crate::error::ApplicationError;
use crate::ports::{PackingListReadService, PackingListRepository, WeatherService};

/// Upper bound on a single weather lookup
pub const DEFAULT_WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Localization text reported when the command carries none
const NO_LOCALIZATION: &str = "<none>";

/// Handler for [`CreatePackingListWithItems`]
pub struct CreatePackingListWithItemsHandler {
    repository: Arc<dyn PackingListRepository>,
    factory: Arc<dyn PackingListFactory>,
    read_service: Arc<dyn PackingListReadService>,
    weather_service: Arc<dyn WeatherService>,
    weather_timeout: Duration,
}

impl fmt::Debug for CreatePackingListWithItemsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatePackingListWithItemsHandler")
            .field("weather_timeout", &self.weather_timeout)
            .finish_non_exhaustive()
    }
}

impl CreatePackingListWithItemsHandler {
    #[must_use]
    pub fn new(
        repository: Arc<dyn PackingListRepository>,
        factory: Arc<dyn PackingListFactory>,
        read_service: Arc<dyn PackingListReadService>,
        weather_service: Arc<dyn WeatherService>,
    ) -> Self {
        Self {
            repository,
            factory,
            read_service,
            weather_service,
            weather_timeout: DEFAULT_WEATHER_TIMEOUT,
        }
    }

    /// Override the weather lookup timeout
    #[must_use]
    pub const fn with_weather_timeout(mut self, timeout: Duration) -> Self {
        self.weather_timeout = timeout;
        self
    }

    async fn resolve_temperature(
        &self,
        localization: &Localization,
    ) -> Result<Temperature, ApplicationError> {
        let lookup = self.weather_service.get_weather(localization);
        let weather = tokio::time::timeout(self.weather_timeout, lookup)
            .await
            .map_err(|_| {
                warn!(%localization, timeout = ?self.weather_timeout, "Weather lookup timed out");
                ApplicationError::ExternalService(format!(
                    "weather lookup for '{localization}' timed out after {:?}",
                    self.weather_timeout
                ))
            })??;

        let Some(weather) = weather else {
            return Err(ApplicationError::MissingLocalizationWeather {
                localization: localization.to_string(),
            });
        };
        Ok(Temperature::new(weather.temperature)?)
    }
}

#[async_trait]
impl CommandHandler<CreatePackingListWithItems> for CreatePackingListWithItemsHandler {
    #[instrument(skip(self, command), fields(list_id = %command.id, name = %command.name))]
    async fn handle(&self, command: CreatePackingListWithItems) -> Result<(), ApplicationError> {
        let CreatePackingListWithItems {
            id,
            name,
            days,
            gender,
            localization,
        } = command;

        let id = PackingListId::from_uuid(id)?;
        let name = PackingListName::new(&name)?;
        let days = TravelDays::new(days)?;

        if self.read_service.exists_by_name(name.as_str()).await? {
            return Err(ApplicationError::PackingListAlreadyExists {
                name: name.as_str().to_string(),
            });
        }

        let Some(localization) = localization else {
            return Err(ApplicationError::MissingLocalizationWeather {
                localization: NO_LOCALIZATION.to_string(),
            });
        };
        let localization = Localization::new(&localization.city, &localization.country)?;

        let temperature = self.resolve_temperature(&localization).await?;
        debug!(%localization, %temperature, "Resolved destination weather");

        let mut list =
            self.factory
                .create_with_default_items(id, name, days, gender, temperature, localization);

        self.repository.add(&list).await?;
        info!(items = list.items().len(), "Packing list created");
        log_events(list.take_events());
        Ok(())
    }
}
