//! Bundled HTTP weather provider backed by the Open-Meteo current-weather
//! endpoint. No API key required.

use serde::Deserialize;

use moodcast_core::config::WeatherConfig;
use moodcast_core::errors::{MoodcastResult, WeatherError};
use moodcast_core::models::{Coordinates, WeatherCondition, WeatherData};
use moodcast_core::traits::IWeatherProvider;

pub struct OpenMeteoProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenMeteoProvider {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: Option<f64>,
    weather_code: u16,
    uv_index: Option<f64>,
}

/// WMO weather interpretation codes → categorical condition.
fn condition_from_code(code: u16) -> WeatherCondition {
    match code {
        0 => WeatherCondition::Sunny,
        1 | 2 => WeatherCondition::PartlyCloudy,
        3 => WeatherCondition::Cloudy,
        45 | 48 => WeatherCondition::Foggy,
        51..=67 | 80..=82 => WeatherCondition::Rainy,
        71..=77 | 85 | 86 => WeatherCondition::Snowy,
        95..=99 => WeatherCondition::Stormy,
        _ => WeatherCondition::Cloudy,
    }
}

impl IWeatherProvider for OpenMeteoProvider {
    async fn fetch_weather(&self, location: Coordinates) -> MoodcastResult<WeatherData> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,weather_code,uv_index".to_string(),
                ),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Unavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(WeatherError::Unavailable {
                reason: format!("status {}", response.status()),
            }
            .into());
        }

        let body: ApiResponse =
            response
                .json()
                .await
                .map_err(|e| WeatherError::InvalidResponse {
                    details: e.to_string(),
                })?;

        Ok(WeatherData {
            temperature: body.current.temperature_2m,
            condition: condition_from_code(body.current.weather_code),
            humidity: body.current.relative_humidity_2m.unwrap_or(50.0).round() as u8,
            uv_index: body.current.uv_index.unwrap_or(0.0).round() as u8,
        })
    }
}
