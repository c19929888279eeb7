use crate::{
    Config, Coordinates,
    error::WeatherError,
    model::CurrentConditions,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current conditions for a coordinate pair.
///
/// Implementations make exactly one upstream call per lookup and never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coords: &Coordinates) -> Result<CurrentConditions, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::with_endpoint(api_key.to_owned(), config.endpoint.clone());
    tracing::debug!(endpoint = provider.endpoint(), "Using OpenWeather endpoint");

    Ok(Arc::new(provider))
}
