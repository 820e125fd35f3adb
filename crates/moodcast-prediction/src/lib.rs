//! # moodcast-prediction
//!
//! The forecasting half of Moodcast: a pure baseline over scored journal
//! history, a combiner that folds in the day's contextual factors, a
//! confidence score derived from history volume, and the `MoodEngine`
//! orchestrator that ties them to the collaborators.
//!
//! Prediction never fails. Every collaborator failure degrades the result
//! (lower confidence, fewer factors) instead of aborting it.

pub mod baseline;
pub mod combiner;
pub mod confidence;
pub mod engine;
pub mod insight;

pub use baseline::{compute_baseline, Baseline};
pub use combiner::combine;
pub use confidence::confidence_from_history;
pub use engine::MoodEngine;
pub use insight::{interpret, Insight};
