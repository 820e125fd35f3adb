//! Fixed numeric constants of the prediction model.
//!
//! These are part of the model's contract, not tunables — changing any of
//! them changes prediction output for every user.

/// Moodcast system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the mood scale.
pub const MOOD_MIN: f64 = 1.0;
/// Upper bound of the mood scale.
pub const MOOD_MAX: f64 = 10.0;
/// Neutral midpoint used when no scored history exists.
pub const NEUTRAL_MOOD: f64 = 5.5;

/// Lower bound for a pattern's mood impact.
pub const IMPACT_MIN: f64 = -3.0;
/// Upper bound for a pattern's mood impact.
pub const IMPACT_MAX: f64 = 3.0;

/// Number of most-recent scored entries feeding the recency component.
pub const RECENCY_WINDOW: usize = 14;
/// Number of most-recent scored entries feeding the short-trend component.
pub const TREND_WINDOW: usize = 7;
/// Maximum same-weekday matches considered by the weekday component.
pub const WEEKDAY_LOOKBACK: usize = 8;

/// Baseline component weights. Must sum to 1.0.
pub const RECENCY_WEIGHT: f64 = 0.40;
pub const WEEKDAY_WEIGHT: f64 = 0.35;
pub const TREND_WEIGHT: f64 = 0.25;

/// Down-scaling applied to each contextual factor category when combined
/// with the baseline. Personal patterns are applied at full weight because
/// they are first-party signal, not a generic heuristic.
pub const WEATHER_SCALE: f64 = 0.70;
pub const SEASON_SCALE: f64 = 0.50;
pub const CALENDAR_SCALE: f64 = 0.60;
pub const MOON_SCALE: f64 = 0.30;
pub const PATTERN_SCALE: f64 = 1.0;

/// Scored-entry counts delimiting the confidence bands.
pub const HIGH_CONFIDENCE_ENTRIES: usize = 30;
pub const MEDIUM_CONFIDENCE_ENTRIES: usize = 10;
