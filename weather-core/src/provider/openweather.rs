use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::{
    Coordinates,
    error::WeatherError,
    model::{CurrentConditions, null_as_default},
};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Look up current conditions in imperial units.
    ///
    /// The response is consumed on every path, so the connection is always
    /// released before returning.
    pub async fn lookup(&self, lat: &str, lon: &str) -> Result<CurrentConditions, WeatherError> {
        tracing::debug!(lat, lon, "Looking up current conditions");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("lat", lat),
                ("lon", lon),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await
            .map_err(WeatherError::UpstreamUnreachable)?;

        let status = res.status();
        let body = res.bytes().await.map_err(WeatherError::UpstreamUnreachable)?;

        if status != StatusCode::OK {
            tracing::debug!(%status, "OpenWeather returned an error status");
            return Err(parse_response_error(&body));
        }

        decode_first(&body).map_err(WeatherError::UpstreamDecode)
    }
}

/// Decode the first JSON value in `body`; anything after it is ignored.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => value,
        // Empty or whitespace-only body: let the plain decoder report EOF.
        None => serde_json::from_slice(body),
    }
}

/// Error payload. Missing or `null` fields are left empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwError {
    #[serde(deserialize_with = "code_as_string")]
    cod: String,
    #[serde(deserialize_with = "null_as_default")]
    message: String,
}

/// OpenWeather sends `cod` as a string for most errors and as a number for some.
fn code_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Code>::deserialize(deserializer)? {
        Some(Code::Text(s)) => s,
        Some(Code::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Turn a non-200 body into an error. An unreadable error body wins over the status.
fn parse_response_error(body: &[u8]) -> WeatherError {
    match decode_first::<OwError>(body) {
        Ok(err) => WeatherError::UpstreamApi {
            code: err.cod,
            message: err.message,
        },
        Err(e) => WeatherError::UpstreamDecode(e),
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, coords: &Coordinates) -> Result<CurrentConditions, WeatherError> {
        self.lookup(&coords.lat, &coords.lon).await
    }
}
