use serde::{Deserialize, Deserializer, Serialize};

/// Highest reading (°F, inclusive) still reported as cold.
pub const COLD_MAX_F: f64 = 50.0;

/// Lowest reading (°F, inclusive) reported as hot.
pub const HOT_MIN_F: f64 = 80.0;

/// Current conditions as the provider reports them, reduced to the fields
/// the gateway reads. Unknown fields are ignored; missing or `null` fields
/// take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "null_as_default")]
    pub coord: Coord,
    #[serde(deserialize_with = "null_as_default")]
    pub weather: Vec<WeatherEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub main: MainReadings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Coord {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub main: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MainReadings {
    /// Fahrenheit, because lookups ask for imperial units.
    #[serde(deserialize_with = "null_as_default")]
    pub temp: f64,
}

/// Read `null` as the type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coarse temperature bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Cold,
    Moderate,
    Hot,
}

impl Temperature {
    /// Classify a Fahrenheit reading. Both thresholds are inclusive; NaN is moderate.
    pub fn from_fahrenheit(temp: f64) -> Self {
        if temp <= COLD_MAX_F {
            Temperature::Cold
        } else if temp >= HOT_MIN_F {
            Temperature::Hot
        } else {
            Temperature::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Cold => "cold",
            Temperature::Moderate => "moderate",
            Temperature::Hot => "hot",
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned to the caller on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub lat: f64,
    pub lon: f64,
    pub condition: String,
    pub temperature: Temperature,
}

impl From<&CurrentConditions> for WeatherResponse {
    fn from(conditions: &CurrentConditions) -> Self {
        let condition = conditions
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_default();

        Self {
            lat: conditions.coord.lat,
            lon: conditions.coord.lon,
            condition,
            temperature: Temperature::from_fahrenheit(conditions.main.temp),
        }
    }
}
