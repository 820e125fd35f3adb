//! Default values for all config structs.

pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_WEATHER_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

pub const DEFAULT_MAX_ENTRIES_PER_BATCH: usize = 50;
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 200;
