//! Adapters implementing application ports over external services

mod weather_adapter;

pub use weather_adapter::WeatherAdapter;
