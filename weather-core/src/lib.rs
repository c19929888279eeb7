//! Core library for the `current-weather` gateway.
//!
//! This crate defines:
//! - Coordinate parsing for the `/weather/{coords}` path segment
//! - The upstream OpenWeather client behind the `WeatherProvider` trait
//! - Normalization of provider payloads into the public response
//! - The axum router and `start_server` entry point
//! - Configuration handling
//!
//! It is used by the `current-weather` binary, which only parses flags and sets up logging.

pub mod config;
pub mod coords;
pub mod error;
pub mod model;
pub mod provider;
pub mod server;

pub use config::Config;
pub use coords::{Coordinates, parse_coordinates};
pub use error::WeatherError;
pub use model::{CurrentConditions, Temperature, WeatherResponse};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use server::{router, serve, start_server, start_server_with};
