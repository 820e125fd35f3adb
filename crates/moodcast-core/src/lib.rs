//! # moodcast-core
//!
//! Foundation crate for the Moodcast mood-prediction engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod pattern;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MoodcastConfig;
pub use errors::{MoodcastError, MoodcastResult};
pub use models::{JournalEntry, MoodPrediction, MoodScore, PredictionFactor};
pub use pattern::{Confidence, MoodImpact, Occupation, PatternType, PersonalPattern};
