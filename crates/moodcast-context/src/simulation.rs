//! Seasonal weather simulation — the mandatory fallback when the live
//! provider is unavailable. Keyed only on calendar month, so two calls for
//! the same date always produce identical output.

use moodcast_core::models::{Season, WeatherCondition, WeatherData};

/// Typical monthly temperature, °C, Northern-hemisphere temperate profile.
const MONTHLY_TEMP_C: [f64; 12] = [
    2.0, 3.0, 8.0, 13.0, 18.0, 23.0, 26.0, 25.0, 20.0, 14.0, 8.0, 4.0,
];

/// Deterministic simulated weather for a month (1-12).
pub fn simulated_weather(month: u32) -> WeatherData {
    let season = Season::from_month(month);
    let (condition, humidity, uv_index) = match season {
        Season::Winter => (WeatherCondition::Cloudy, 75, 1),
        Season::Spring => (WeatherCondition::PartlyCloudy, 60, 4),
        Season::Summer => (WeatherCondition::Sunny, 50, 7),
        Season::Fall => (WeatherCondition::Cloudy, 70, 2),
    };
    WeatherData {
        temperature: MONTHLY_TEMP_C[(month.clamp(1, 12) - 1) as usize],
        condition,
        humidity,
        uv_index,
    }
}
