//! Error taxonomy. Per-collaborator enums, wrapped by [`MoodcastError`].
//!
//! Design rule: prediction never fails. Collaborator errors exist so the
//! engine can log and degrade; the only errors surfaced to callers are
//! hard local-storage failures on explicit user actions.

mod extraction_error;
mod store_error;
mod weather_error;

pub use extraction_error::ExtractionError;
pub use store_error::StoreError;
pub use weather_error::WeatherError;

/// Top-level error for the Moodcast workspace.
#[derive(Debug, thiserror::Error)]
pub enum MoodcastError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias used across the workspace.
pub type MoodcastResult<T> = Result<T, MoodcastError>;
