//! Serde-default config structs, loadable from TOML. Every field has a
//! default, so an empty file (or no file) is a valid configuration.

pub mod defaults;
mod extraction_config;
mod weather_config;

pub use extraction_config::ExtractionConfig;
pub use weather_config::WeatherConfig;

use serde::{Deserialize, Serialize};

use crate::errors::MoodcastResult;

/// Aggregated configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodcastConfig {
    pub weather: WeatherConfig,
    pub extraction: ExtractionConfig,
}

impl MoodcastConfig {
    /// Parse from a TOML document. Missing sections and fields take their
    /// defaults.
    pub fn from_toml_str(s: &str) -> MoodcastResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
