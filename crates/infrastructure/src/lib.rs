//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: SQLite and
//! in-memory packing list stores and the Open-Meteo weather adapter. Also
//! hosts configuration, logging setup and retry.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod retry;
pub mod telemetry;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, DatabaseConfig, Environment, HandlerConfig, LoggingConfig};
pub use persistence::{
    ConnectionPool, InMemoryPackingListStore, SqlitePackingListReadService,
    SqlitePackingListRepository, create_pool,
};
pub use retry::{RetryConfig, Retryable, retry};
pub use telemetry::{TelemetryError, init_logging};
