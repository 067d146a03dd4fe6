//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding and forecast APIs
//! (<https://open-meteo.com>). No API key is required.

pub mod client;
mod models;

pub use client::{
    MAX_CACHE_TTL_MINUTES, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
pub use models::{CurrentWeather, GeoLocation, WeatherCondition};
