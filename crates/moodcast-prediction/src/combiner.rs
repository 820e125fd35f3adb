//! Prediction combiner: baseline plus weighted contextual deltas, bounded
//! to the mood scale, with the explainable factor breakdown.

use chrono::Utc;

use moodcast_core::models::{ContextualFactors, MoodPrediction, MoodScore, PredictionFactor};

use crate::baseline::Baseline;
use crate::confidence::confidence_from_history;

/// Fold the context bundle into the baseline and produce the final
/// prediction. Pure except for the generation timestamp.
///
/// Bounding lives in `MoodScore::new`: the clamped scale and the
/// non-finite-to-neutral collapse both happen there, so no arithmetic in
/// this function can escape [1, 10].
pub fn combine(user_id: &str, baseline: &Baseline, context: &ContextualFactors) -> MoodPrediction {
    let adjustment: f64 = context.factors.iter().map(|f| f.weighted_impact()).sum();
    let predicted_mood = MoodScore::new(baseline.score + adjustment);

    let mut factors: Vec<PredictionFactor> = context
        .factors
        .iter()
        .filter(|f| f.weighted_impact() != 0.0)
        .map(|f| PredictionFactor {
            name: f.name.clone(),
            impact: f.weighted_impact(),
            description: f.description.clone(),
        })
        .collect();
    factors.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));

    let confidence = confidence_from_history(baseline.scored_entries);

    tracing::debug!(
        user_id = %user_id,
        target_date = %context.target_date,
        predicted = %predicted_mood,
        baseline = baseline.score,
        factor_count = factors.len(),
        "prediction combined"
    );

    MoodPrediction {
        user_id: user_id.to_string(),
        target_date: context.target_date,
        predicted_mood,
        confidence,
        confidence_band: confidence.band(),
        factors,
        scored_entries: baseline.scored_entries,
        generated_at: Utc::now(),
    }
}
