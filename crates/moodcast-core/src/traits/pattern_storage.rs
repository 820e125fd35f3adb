use std::future::Future;

use crate::errors::MoodcastResult;
use crate::models::UserMoodProfile;
use crate::pattern::{Occupation, PersonalPattern};

/// Local key-value persistence for the pattern store. Synchronous by
/// contract: every local read/write completes without suspending, so the
/// in-memory and on-disk views never diverge for longer than one call.
pub trait IPatternStorage: Send + Sync {
    fn load(&self, user_id: &str) -> MoodcastResult<Vec<PersonalPattern>>;
    fn save(&self, user_id: &str, patterns: &[PersonalPattern]) -> MoodcastResult<()>;
    fn load_profile(&self, user_id: &str) -> MoodcastResult<Option<UserMoodProfile>>;
    fn save_profile(&self, profile: &UserMoodProfile) -> MoodcastResult<()>;
    /// Remove every stored pattern for the user. The profile summary is
    /// kept; it is a rebuildable cache, not user pattern data.
    fn clear(&self, user_id: &str) -> MoodcastResult<()>;
}

impl<T: IPatternStorage> IPatternStorage for &T {
    fn load(&self, user_id: &str) -> MoodcastResult<Vec<PersonalPattern>> {
        (**self).load(user_id)
    }
    fn save(&self, user_id: &str, patterns: &[PersonalPattern]) -> MoodcastResult<()> {
        (**self).save(user_id, patterns)
    }
    fn load_profile(&self, user_id: &str) -> MoodcastResult<Option<UserMoodProfile>> {
        (**self).load_profile(user_id)
    }
    fn save_profile(&self, profile: &UserMoodProfile) -> MoodcastResult<()> {
        (**self).save_profile(profile)
    }
    fn clear(&self, user_id: &str) -> MoodcastResult<()> {
        (**self).clear(user_id)
    }
}

/// Remote (cloud) side of the pattern store. Advisory and independently
/// retryable: a full outage degrades personalization freshness but never
/// breaks prediction.
pub trait IRemotePatternStore: Send + Sync {
    fn load_patterns(
        &self,
        user_id: &str,
    ) -> impl Future<Output = MoodcastResult<Vec<PersonalPattern>>> + Send;

    fn save_pattern(
        &self,
        pattern: &PersonalPattern,
    ) -> impl Future<Output = MoodcastResult<()>> + Send;

    fn delete_pattern(&self, id: &str) -> impl Future<Output = MoodcastResult<()>> + Send;

    fn save_occupation(
        &self,
        user_id: &str,
        occupation: Occupation,
    ) -> impl Future<Output = MoodcastResult<()>> + Send;
}
