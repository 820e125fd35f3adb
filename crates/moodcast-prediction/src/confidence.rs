//! Confidence from history volume.
//!
//! Confidence reflects trust in the baseline only. Contextual factors are
//! heuristic by construction and never raise it.

use moodcast_core::constants::{HIGH_CONFIDENCE_ENTRIES, MEDIUM_CONFIDENCE_ENTRIES};
use moodcast_core::pattern::Confidence;

/// Map a scored-entry count to a confidence value.
///
/// Monotonic in the count, pinned to the documented bands: 30+ entries
/// land at 0.8 or above, 10..30 in [0.6, 0.8), fewer below 0.6, and zero
/// entries at the low end of the low band.
pub fn confidence_from_history(scored_entries: usize) -> Confidence {
    let value = if scored_entries >= HIGH_CONFIDENCE_ENTRIES {
        let extra = (scored_entries - HIGH_CONFIDENCE_ENTRIES) as f64 * 0.005;
        0.8 + extra.min(0.15)
    } else if scored_entries >= MEDIUM_CONFIDENCE_ENTRIES {
        0.6 + (scored_entries - MEDIUM_CONFIDENCE_ENTRIES) as f64 * 0.01
    } else if scored_entries > 0 {
        0.3 + scored_entries as f64 * 0.03
    } else {
        0.2
    };
    Confidence::new(value)
}
