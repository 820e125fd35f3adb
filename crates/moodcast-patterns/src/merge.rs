//! The confidence-comparison merge rule.
//!
//! Exactly one pattern may occupy a merge key after merge. A candidate
//! with confidence not greater than the incumbent's is discarded —
//! existing knowledge is never overwritten by a weaker signal.

use moodcast_core::pattern::PersonalPattern;

/// What happened to a candidate when merged into a pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No incumbent at the key; the candidate was appended.
    Added,
    /// The candidate beat the incumbent's confidence and replaced it.
    Replaced,
    /// The incumbent stood; the candidate was dropped.
    Discarded,
}

/// Merge one candidate into `patterns` under the confidence rule.
pub fn merge_candidate(
    patterns: &mut Vec<PersonalPattern>,
    candidate: PersonalPattern,
) -> MergeOutcome {
    let key = candidate.merge_key();
    match patterns.iter_mut().find(|p| p.merge_key() == key) {
        Some(existing) => {
            if candidate.confidence > existing.confidence {
                *existing = candidate;
                MergeOutcome::Replaced
            } else {
                MergeOutcome::Discarded
            }
        }
        None => {
            patterns.push(candidate);
            MergeOutcome::Added
        }
    }
}
