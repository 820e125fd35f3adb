use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{MoonPhase, Season};
use super::weather::{WeatherData, WeatherSource};
use crate::pattern::PersonalPattern;

/// Category of a contextual factor. Determines the down-scaling the
/// combiner applies to the category's summed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Weather,
    Season,
    MoonPhase,
    Calendar,
    PersonalPattern,
}

/// One weighted contextual contribution. The gatherer emits these raw;
/// bounding and combination are the combiner's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFactor {
    pub name: String,
    pub kind: FactorKind,
    /// Unscaled delta.
    pub raw_impact: f64,
    /// Category multiplier applied by the combiner.
    pub multiplier: f64,
    /// Natural-language explanation for the factor breakdown.
    pub description: String,
}

impl ContextFactor {
    /// The delta this factor contributes to the final score.
    pub fn weighted_impact(&self) -> f64 {
        self.raw_impact * self.multiplier
    }
}

/// The per-day context bundle. Ephemeral: computed per prediction call,
/// never persisted.
#[derive(Debug, Clone)]
pub struct ContextualFactors {
    pub target_date: NaiveDate,
    pub weather: WeatherData,
    pub weather_source: WeatherSource,
    pub season: Season,
    pub moon_phase: MoonPhase,
    /// Stored patterns whose matcher fired for the target date.
    pub applicable_patterns: Vec<PersonalPattern>,
    /// Flat list of weighted contributions, all categories.
    pub factors: Vec<ContextFactor>,
}
