use std::future::Future;

use crate::errors::MoodcastResult;
use crate::models::{Coordinates, WeatherData};

/// External weather collaborator. Any error or timeout is treated by the
/// gatherer as "no data" and answered with the seasonal simulation; the
/// gatherer never retries within the same prediction call.
pub trait IWeatherProvider: Send + Sync {
    fn fetch_weather(
        &self,
        location: Coordinates,
    ) -> impl Future<Output = MoodcastResult<WeatherData>> + Send;
}
