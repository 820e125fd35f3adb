use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinates, as provided by the host app. Optional for
/// every prediction call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Categorical weather condition with a fixed mood delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
}

impl WeatherCondition {
    /// Fixed condition-to-mood mapping.
    pub fn mood_delta(self) -> f64 {
        match self {
            WeatherCondition::Sunny => 0.8,
            WeatherCondition::PartlyCloudy => 0.3,
            WeatherCondition::Cloudy => -0.2,
            WeatherCondition::Rainy => -0.5,
            WeatherCondition::Stormy => -0.8,
            WeatherCondition::Snowy => -0.3,
            WeatherCondition::Foggy => -0.4,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Foggy => "foggy",
        };
        write!(f, "{s}")
    }
}

/// A weather snapshot for one location and moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: WeatherCondition,
    /// Relative humidity, percent.
    pub humidity: u8,
    pub uv_index: u8,
}

/// Where a weather snapshot came from. Simulated weather is a documented
/// fallback, not an error, but consumers may want to label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    Live,
    Simulated,
}
