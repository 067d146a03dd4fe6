//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod packing_list_read_service;
mod packing_list_repository;
mod weather_service;

#[cfg(test)]
pub use packing_list_read_service::MockPackingListReadService;
pub use packing_list_read_service::PackingListReadService;
#[cfg(test)]
pub use packing_list_repository::MockPackingListRepository;
pub use packing_list_repository::PackingListRepository;
#[cfg(test)]
pub use weather_service::MockWeatherService;
pub use weather_service::{WeatherDto, WeatherService};
