//! Base predictor: a weighted blend of three views over scored history.
//!
//! Pure and synchronous. Entries without a mood score contribute nothing;
//! a user with zero scored entries gets the neutral midpoint and an
//! explicit no-history marker for the confidence calculation.

use chrono::{Datelike, NaiveDate};

use moodcast_core::constants::{
    NEUTRAL_MOOD, RECENCY_WEIGHT, RECENCY_WINDOW, TREND_WEIGHT, TREND_WINDOW, WEEKDAY_LOOKBACK,
    WEEKDAY_WEIGHT,
};
use moodcast_core::models::JournalEntry;

/// The baseline and its components, kept separate so the combiner and
/// confidence scoring can inspect them.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub score: f64,
    /// Number of scored entries behind the blend. Zero means `score` is
    /// the neutral midpoint.
    pub scored_entries: usize,
    pub recency: Option<f64>,
    pub same_weekday: Option<f64>,
    pub short_trend: Option<f64>,
}

impl Baseline {
    fn no_history() -> Self {
        Self {
            score: NEUTRAL_MOOD,
            scored_entries: 0,
            recency: None,
            same_weekday: None,
            short_trend: None,
        }
    }
}

/// Blend recency, same-weekday, and short-trend means into one score.
///
/// The weekday and trend components fall back to the recency mean when
/// their own windows are empty, so the weights always sum to one over
/// defined values.
pub fn compute_baseline(entries: &[JournalEntry], target_date: NaiveDate) -> Baseline {
    let mut scored: Vec<(&JournalEntry, f64)> = entries
        .iter()
        .filter_map(|e| e.mood_score().map(|score| (e, score)))
        .collect();
    if scored.is_empty() {
        return Baseline::no_history();
    }
    // Newest first; windows below are "most recent N".
    scored.sort_by_key(|(e, _)| std::cmp::Reverse(e.created_at));

    let recency = mean(scored.iter().take(RECENCY_WINDOW).map(|(_, s)| *s));
    let target_weekday = target_date.weekday();
    let same_weekday = mean(
        scored
            .iter()
            .filter(|(e, _)| e.created_at.date_naive().weekday() == target_weekday)
            .take(WEEKDAY_LOOKBACK)
            .map(|(_, s)| *s),
    );
    let short_trend = mean(scored.iter().take(TREND_WINDOW).map(|(_, s)| *s));

    // recency is Some: scored is non-empty.
    let recency_value = recency.unwrap_or(NEUTRAL_MOOD);
    let weekday_value = same_weekday.unwrap_or(recency_value);
    let trend_value = short_trend.unwrap_or(recency_value);

    let score = RECENCY_WEIGHT * recency_value
        + WEEKDAY_WEIGHT * weekday_value
        + TREND_WEIGHT * trend_value;

    Baseline {
        score,
        scored_entries: scored.len(),
        recency,
        same_weekday,
        short_trend,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
