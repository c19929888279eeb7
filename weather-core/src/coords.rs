use crate::error::WeatherError;

/// Latitude/longitude exactly as the caller wrote them, trimmed.
///
/// The values are not checked for being numeric; the provider rejects
/// anything it cannot use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

/// Parse a `"<lat>,<lon>"` path segment.
pub fn parse_coordinates(value: &str) -> Result<Coordinates, WeatherError> {
    let mut parts = value.split(',');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => Ok(Coordinates {
            lat: lat.trim().to_string(),
            lon: lon.trim().to_string(),
        }),
        _ => Err(WeatherError::MalformedCoordinates),
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
