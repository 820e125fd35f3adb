//! # moodcast-context
//!
//! Assembles the per-day context bundle for a prediction: weather (live or
//! simulated), season, moon phase, calendar windows, and the personal
//! patterns that apply to the target date.
//!
//! The gatherer emits raw weighted factors and never bounds or combines
//! them — that is the combiner's job. Its one hard requirement: weather
//! unavailability is answered with a deterministic seasonal simulation,
//! never with an error.

pub mod calendar;
pub mod gatherer;
pub mod moon;
pub mod providers;
pub mod simulation;

pub use gatherer::ContextGatherer;
pub use providers::{CachedWeather, OpenMeteoProvider};
