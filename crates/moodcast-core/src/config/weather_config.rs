use serde::{Deserialize, Serialize};

use super::defaults;

/// Weather subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Deadline for a live weather fetch before falling back to the
    /// seasonal simulation.
    pub timeout_secs: u64,
    /// TTL of the cached-weather wrapper.
    pub cache_ttl_secs: u64,
    /// Endpoint of the bundled HTTP provider.
    pub endpoint: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::DEFAULT_WEATHER_TIMEOUT_SECS,
            cache_ttl_secs: defaults::DEFAULT_WEATHER_CACHE_TTL_SECS,
            endpoint: defaults::DEFAULT_WEATHER_ENDPOINT.to_string(),
        }
    }
}
