//! ExtractionAdapter — orchestrates one extraction batch end to end.

use moodcast_core::config::ExtractionConfig;
use moodcast_core::errors::MoodcastResult;
use moodcast_core::models::JournalEntry;
use moodcast_core::pattern::Occupation;
use moodcast_core::traits::{IPatternExtractor, IPatternStorage, IRemotePatternStore};
use moodcast_patterns::{MergeOutcome, PatternStore};

use crate::validate::validate_response;

/// Summary of one extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    /// Candidates that landed in the store (added or replaced).
    pub accepted: usize,
    /// Candidates discarded by the confidence merge rule.
    pub merged_away: usize,
    /// Candidates rejected at the validation boundary.
    pub rejected: usize,
    /// Occupation classified in this run, if any.
    pub occupation: Option<Occupation>,
}

/// Stateless adapter around the text-understanding collaborator. Safe to
/// invoke repeatedly (idempotent up to confidence comparison); throttling
/// is the caller's job.
pub struct ExtractionAdapter<X> {
    extractor: X,
    config: ExtractionConfig,
}

impl<X: IPatternExtractor> ExtractionAdapter<X> {
    pub fn new(extractor: X, config: ExtractionConfig) -> Self {
        Self { extractor, config }
    }

    /// Run one batch: call the collaborator on the entry texts, validate
    /// its response, and reconcile the surviving candidates into the
    /// store. A collaborator failure is returned so the background caller
    /// can retry later; it never corrupts the store.
    pub async fn run<L, R>(
        &self,
        entries: &[JournalEntry],
        store: &PatternStore<L, R>,
    ) -> MoodcastResult<ExtractionOutcome>
    where
        L: IPatternStorage,
        R: IRemotePatternStore + 'static,
    {
        if entries.is_empty() {
            return Ok(ExtractionOutcome::default());
        }

        // Newest entries first, capped to the batch limit.
        let mut batch: Vec<&JournalEntry> = entries.iter().collect();
        batch.sort_by_key(|e| std::cmp::Reverse(e.created_at));
        batch.truncate(self.config.max_entries_per_batch);

        let texts: Vec<String> = batch.iter().map(|e| e.content.clone()).collect();
        let response = self.extractor.extract_patterns(&texts).await?;

        let provenance_id = batch.first().map(|e| e.id.as_str());
        let validated = validate_response(
            store.user_id(),
            response,
            provenance_id,
            self.config.max_snippet_chars,
        );

        let mut outcome = ExtractionOutcome {
            rejected: validated.rejected,
            occupation: validated.occupation.map(|(occupation, _)| occupation),
            ..ExtractionOutcome::default()
        };

        for candidate in validated.patterns {
            match store.add_pattern(candidate)? {
                MergeOutcome::Added | MergeOutcome::Replaced => outcome.accepted += 1,
                MergeOutcome::Discarded => outcome.merged_away += 1,
            }
        }

        // The profile counts what was actually submitted, which may be
        // fewer than the caller handed in when the batch was truncated.
        let analyzed = batch.len();
        let summary = validated.summary;
        let classified = outcome.occupation;
        store.update_profile(|profile| {
            profile.total_entries_analyzed += analyzed;
            profile.last_extraction_date = Some(chrono::Utc::now());
            if let Some(summary) = summary {
                profile.llm_summary = Some(summary);
            }
            // An explicit user-set occupation is first-party and wins; the
            // classifier only fills in an unknown.
            if profile.occupation == Occupation::Unknown {
                if let Some(occupation) = classified {
                    profile.occupation = occupation;
                }
            }
        })?;

        tracing::info!(
            accepted = outcome.accepted,
            merged_away = outcome.merged_away,
            rejected = outcome.rejected,
            "extraction batch complete"
        );
        Ok(outcome)
    }
}
