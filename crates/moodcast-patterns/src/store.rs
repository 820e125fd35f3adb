//! PatternStore — the single owner of a user's in-memory pattern list.
//!
//! Every mutation goes through `add_pattern` / `set_occupation` /
//! `clear_patterns` and is immediately followed by a local persist, so the
//! in-memory and on-disk views never diverge for longer than one call.
//! Cloud pushes are spawned fire-and-forget and never block or fail the
//! local operation.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use moodcast_core::errors::MoodcastResult;
use moodcast_core::models::UserMoodProfile;
use moodcast_core::pattern::{
    Confidence, MoodImpact, Occupation, PatternType, PersonalPattern,
};
use moodcast_core::traits::{IPatternStorage, IRemotePatternStore};

use crate::merge::{merge_candidate, MergeOutcome};
use crate::sync::SyncReport;

pub struct PatternStore<L, R> {
    user_id: String,
    local: L,
    remote: Arc<R>,
    patterns: RwLock<Vec<PersonalPattern>>,
    profile: RwLock<UserMoodProfile>,
}

impl<L, R> PatternStore<L, R>
where
    L: IPatternStorage,
    R: IRemotePatternStore + 'static,
{
    /// Open the store for one user, loading patterns and profile from
    /// local storage. A missing profile starts fresh; a local read failure
    /// is surfaced, since a store that cannot read its own state is not
    /// usable.
    pub fn open(user_id: impl Into<String>, local: L, remote: Arc<R>) -> MoodcastResult<Self> {
        let user_id = user_id.into();
        let patterns = local.load(&user_id)?;
        let profile = local
            .load_profile(&user_id)?
            .unwrap_or_else(|| UserMoodProfile::new(user_id.clone()));
        tracing::debug!(
            user_id = %user_id,
            count = patterns.len(),
            "pattern store opened"
        );
        Ok(Self {
            user_id,
            local,
            remote,
            patterns: RwLock::new(patterns),
            profile: RwLock::new(profile),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn patterns_read(&self) -> RwLockReadGuard<'_, Vec<PersonalPattern>> {
        self.patterns.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn patterns_write(&self) -> RwLockWriteGuard<'_, Vec<PersonalPattern>> {
        self.patterns
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the current in-memory list to local storage.
    fn persist_local(&self) -> MoodcastResult<()> {
        let snapshot = self.patterns_read().clone();
        self.local.save(&self.user_id, &snapshot)
    }

    /// Push one pattern to the cloud without blocking the caller. Errors
    /// are logged and dropped; local state is already authoritative.
    fn spawn_cloud_push(&self, pattern: PersonalPattern) {
        let remote = Arc::clone(&self.remote);
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(pattern_id = %pattern.id, "no async runtime, cloud push skipped");
            return;
        };
        handle.spawn(async move {
            if let Err(e) = remote.save_pattern(&pattern).await {
                tracing::warn!(pattern_id = %pattern.id, "cloud push failed: {e}");
            }
        });
    }

    fn spawn_occupation_push(&self, occupation: Occupation) {
        let remote = Arc::clone(&self.remote);
        let user_id = self.user_id.clone();
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        handle.spawn(async move {
            if let Err(e) = remote.save_occupation(&user_id, occupation).await {
                tracing::warn!(user_id = %user_id, "occupation cloud mirror failed: {e}");
            }
        });
    }

    /// Merge a candidate pattern under the confidence rule, persist
    /// locally, and fire a cloud push for anything that landed.
    pub fn add_pattern(&self, candidate: PersonalPattern) -> MoodcastResult<MergeOutcome> {
        let outcome = {
            let mut patterns = self.patterns_write();
            merge_candidate(&mut patterns, candidate.clone())
        };
        if outcome == MergeOutcome::Discarded {
            tracing::debug!(
                name = %candidate.name,
                confidence = %candidate.confidence,
                "candidate discarded, incumbent is stronger"
            );
            return Ok(outcome);
        }
        self.persist_local()?;
        self.spawn_cloud_push(candidate);
        Ok(outcome)
    }

    /// Direct occupation override. First-party signal: bypasses the
    /// confidence comparison and replaces any existing occupation pattern
    /// outright. A local persist failure surfaces — silently dropping an
    /// explicit user action is not acceptable.
    pub fn set_occupation(&self, occupation: Occupation) -> MoodcastResult<()> {
        let pattern = occupation_pattern(&self.user_id, occupation);
        {
            let mut patterns = self.patterns_write();
            patterns.retain(|p| p.pattern_type != PatternType::OccupationType);
            patterns.push(pattern.clone());
        }
        self.persist_local()?;
        {
            let mut profile = self.profile.write().unwrap_or_else(PoisonError::into_inner);
            profile.occupation = occupation;
            self.local.save_profile(&profile)?;
        }
        tracing::info!(user_id = %self.user_id, %occupation, "occupation set");
        self.spawn_cloud_push(pattern);
        self.spawn_occupation_push(occupation);
        Ok(())
    }

    /// The user's occupation, `Unknown` when never set or extracted.
    ///
    /// The profile is a rebuildable cache, so a fresh device that just
    /// pulled its patterns from the cloud may hold an occupation pattern
    /// while the profile still says `Unknown`; the stored pattern is the
    /// fallback.
    pub fn occupation(&self) -> Occupation {
        let cached = self
            .profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .occupation;
        if cached != Occupation::Unknown {
            return cached;
        }
        self.patterns_read()
            .iter()
            .find(|p| p.pattern_type == PatternType::OccupationType)
            .and_then(|p| p.occupation)
            .unwrap_or(Occupation::Unknown)
    }

    /// Snapshot of the current pattern set.
    pub fn patterns(&self) -> Vec<PersonalPattern> {
        self.patterns_read().clone()
    }

    /// The subset of stored patterns whose matcher fires for `date`.
    /// Seasonal and trigger patterns are not date-matched here; season and
    /// keyword logic belongs to the contextual gatherer and the caller.
    pub fn patterns_affecting(&self, date: NaiveDate) -> Vec<PersonalPattern> {
        self.patterns_read()
            .iter()
            .filter(|p| p.applies_on(date))
            .cloned()
            .collect()
    }

    /// Current profile snapshot.
    pub fn profile(&self) -> UserMoodProfile {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate and persist the profile summary. Advisory cache; a persist
    /// failure still surfaces because the caller asked for the write.
    pub fn update_profile(
        &self,
        apply: impl FnOnce(&mut UserMoodProfile),
    ) -> MoodcastResult<()> {
        let mut profile = self.profile.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut profile);
        self.local.save_profile(&profile)
    }

    /// Merge local and remote pattern sets using the same per-key
    /// confidence rule as `add_pattern`, persist the merged result
    /// locally, and best-effort push the occupation to the remote store.
    ///
    /// Safe to call with no network: the cycle is skipped and local state
    /// stays untouched. Intended to run once per app/session start.
    pub async fn sync_with_cloud(&self) -> MoodcastResult<SyncReport> {
        let remote_patterns = match self.remote.load_patterns(&self.user_id).await {
            Ok(patterns) => patterns,
            Err(e) => {
                tracing::warn!(user_id = %self.user_id, "cloud sync skipped: {e}");
                return Ok(SyncReport::skipped());
            }
        };

        let mut report = SyncReport {
            pulled: remote_patterns.len(),
            ..SyncReport::default()
        };
        {
            let mut patterns = self.patterns_write();
            for remote_pattern in remote_patterns {
                match merge_candidate(&mut patterns, remote_pattern) {
                    MergeOutcome::Added => report.added += 1,
                    MergeOutcome::Replaced => report.replaced += 1,
                    MergeOutcome::Discarded => report.discarded += 1,
                }
            }
        }
        self.persist_local()?;

        let occupation = self.occupation();
        if occupation != Occupation::Unknown {
            match self.remote.save_occupation(&self.user_id, occupation).await {
                Ok(()) => report.pushed_occupation = true,
                Err(e) => {
                    tracing::warn!(user_id = %self.user_id, "occupation push failed: {e}");
                }
            }
        }

        tracing::info!(
            user_id = %self.user_id,
            pulled = report.pulled,
            added = report.added,
            replaced = report.replaced,
            "cloud sync complete"
        );
        Ok(report)
    }

    /// Remove all patterns for this user: local wipe first, then
    /// best-effort remote deletion per pattern. One remote failure never
    /// blocks deletion of the others.
    pub async fn clear_patterns(&self) -> MoodcastResult<()> {
        let ids: Vec<String> = {
            let mut patterns = self.patterns_write();
            let ids = patterns.iter().map(|p| p.id.clone()).collect();
            patterns.clear();
            ids
        };
        self.local.clear(&self.user_id)?;
        tracing::info!(user_id = %self.user_id, count = ids.len(), "patterns cleared locally");

        let mut remote_failures = 0usize;
        for id in &ids {
            if let Err(e) = self.remote.delete_pattern(id).await {
                remote_failures += 1;
                tracing::warn!(pattern_id = %id, "remote delete failed: {e}");
            }
        }
        if remote_failures > 0 {
            tracing::warn!(
                user_id = %self.user_id,
                remote_failures,
                "some remote deletions failed; they will be reconciled by a later sync"
            );
        }
        Ok(())
    }
}

/// Build the singleton occupation pattern for a user. Its mood impact is
/// zero here: the day-dependent impact comes from the occupation curve at
/// gather time, not from the stored record.
fn occupation_pattern(user_id: &str, occupation: Occupation) -> PersonalPattern {
    let mut p = PersonalPattern::new(
        user_id,
        PatternType::OccupationType,
        format!("Occupation: {occupation}"),
        "Work-week rhythm derived from occupation",
        MoodImpact::new(0.0),
        Confidence::new(1.0),
    );
    p.occupation = Some(occupation);
    p
}
