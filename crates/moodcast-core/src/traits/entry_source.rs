use std::future::Future;

use chrono::{DateTime, Utc};

use crate::errors::MoodcastResult;
use crate::models::JournalEntry;

/// Read-only view of the journal persistence collaborator.
///
/// Futures carry an explicit `Send` bound so engine code can await them
/// inside spawned tasks regardless of the concrete implementation.
pub trait IEntrySource: Send + Sync {
    /// Entries for a user, optionally restricted to those created at or
    /// after `since`. Newest first is not guaranteed; callers sort.
    fn entries(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = MoodcastResult<Vec<JournalEntry>>> + Send;
}
