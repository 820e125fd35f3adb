//! MoodEngine — ties the entry source, context gatherer, and pattern
//! store together into one `predict` call.

use std::sync::Arc;

use chrono::NaiveDate;

use moodcast_core::models::{Coordinates, JournalEntry, MoodPrediction};
use moodcast_core::traits::{
    IEntrySource, IPatternStorage, IRemotePatternStore, IWeatherProvider,
};
use moodcast_context::ContextGatherer;
use moodcast_patterns::PatternStore;

use crate::baseline::compute_baseline;
use crate::combiner::combine;

/// The prediction orchestrator for one user.
///
/// Owns its collaborators; shares the pattern store with whoever feeds it
/// (extraction, sync, the host app's settings screen).
pub struct MoodEngine<E, W, L, R> {
    entries: E,
    gatherer: ContextGatherer<W>,
    store: Arc<PatternStore<L, R>>,
}

impl<E, W, L, R> MoodEngine<E, W, L, R>
where
    E: IEntrySource,
    W: IWeatherProvider,
    L: IPatternStorage,
    R: IRemotePatternStore + 'static,
{
    pub fn new(entries: E, gatherer: ContextGatherer<W>, store: Arc<PatternStore<L, R>>) -> Self {
        Self {
            entries,
            gatherer,
            store,
        }
    }

    pub fn store(&self) -> &PatternStore<L, R> {
        &self.store
    }

    /// Forecast the user's mood for `target_date`.
    ///
    /// Never fails: an entry-source outage means an empty history (neutral
    /// baseline, low confidence), and weather degradation is already
    /// absorbed by the gatherer. Baseline and context are independent, so
    /// the history fetch and the gather run concurrently.
    pub async fn predict(
        &self,
        target_date: NaiveDate,
        location: Option<Coordinates>,
    ) -> MoodPrediction {
        let history = self.fetch_history();
        let context = self.gatherer.gather(target_date, location, &self.store);
        let (entries, context) = tokio::join!(history, context);

        let baseline = compute_baseline(&entries, target_date);
        combine(self.store.user_id(), &baseline, &context)
    }

    async fn fetch_history(&self) -> Vec<JournalEntry> {
        match self.entries.entries(self.store.user_id(), None).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    user_id = %self.store.user_id(),
                    "entry source unavailable, predicting without history: {e}"
                );
                Vec::new()
            }
        }
    }
}
