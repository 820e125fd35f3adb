//! Weather provider implementations: the bundled Open-Meteo client and a
//! TTL cache wrapper usable around any provider.

pub mod cached;
pub mod open_meteo;

pub use cached::CachedWeather;
pub use open_meteo::OpenMeteoProvider;
