//! TTL cache wrapper around any weather provider. Coordinates are rounded
//! to two decimals (~1 km) so nearby fixes share an entry.

use std::time::Duration;

use moka::sync::Cache;

use moodcast_core::config::WeatherConfig;
use moodcast_core::errors::MoodcastResult;
use moodcast_core::models::{Coordinates, WeatherData};
use moodcast_core::traits::IWeatherProvider;

pub struct CachedWeather<W> {
    inner: W,
    cache: Cache<(i64, i64), WeatherData>,
}

impl<W> CachedWeather<W> {
    pub fn new(inner: W, config: &WeatherConfig) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .max_capacity(64)
                .time_to_live(Duration::from_secs(config.cache_ttl_secs))
                .build(),
        }
    }
}

fn cache_key(location: Coordinates) -> (i64, i64) {
    (
        (location.latitude * 100.0).round() as i64,
        (location.longitude * 100.0).round() as i64,
    )
}

impl<W: IWeatherProvider> IWeatherProvider for CachedWeather<W> {
    async fn fetch_weather(&self, location: Coordinates) -> MoodcastResult<WeatherData> {
        let key = cache_key(location);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(?key, "weather cache hit");
            return Ok(hit);
        }
        let fresh = self.inner.fetch_weather(location).await?;
        self.cache.insert(key, fresh.clone());
        Ok(fresh)
    }
}
