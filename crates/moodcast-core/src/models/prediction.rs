use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MOOD_MAX, MOOD_MIN, NEUTRAL_MOOD};
use crate::pattern::{Confidence, ConfidenceBand};

/// A mood value bounded to the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MoodScore(f64);

impl MoodScore {
    /// Midpoint returned when no history exists or arithmetic degenerates.
    pub const NEUTRAL: MoodScore = MoodScore(NEUTRAL_MOOD);

    /// Create a new MoodScore, clamping to [1.0, 10.0]. Non-finite input
    /// collapses to the neutral midpoint instead of propagating NaN.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(MOOD_MIN, MOOD_MAX))
        } else {
            Self::NEUTRAL
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for MoodScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for MoodScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<MoodScore> for f64 {
    fn from(s: MoodScore) -> Self {
        s.0
    }
}

/// One contributing term of a prediction, for the explainable breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionFactor {
    pub name: String,
    /// Signed contribution to the final score.
    pub impact: f64,
    /// Natural-language explanation, e.g. "Sunny weather typically lifts
    /// your mood".
    pub description: String,
}

/// The forecast returned to the caller. Ephemeral; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodPrediction {
    pub user_id: String,
    pub target_date: NaiveDate,
    pub predicted_mood: MoodScore,
    /// Trust in the baseline, derived from scored-entry volume only.
    pub confidence: Confidence,
    pub confidence_band: ConfidenceBand,
    /// Sorted by absolute impact descending, most explanatory first.
    pub factors: Vec<PredictionFactor>,
    /// Number of scored historical entries behind the baseline.
    pub scored_entries: usize,
    pub generated_at: DateTime<Utc>,
}
