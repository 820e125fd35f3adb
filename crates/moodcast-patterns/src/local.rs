//! In-memory implementation of the local storage trait.
//!
//! Host apps plug in their own key-value layer; this implementation backs
//! tests and callers that keep everything in process. Values are stored
//! as serialized JSON so the round-trip matches what a real key-value
//! store would see.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use moodcast_core::errors::MoodcastResult;
use moodcast_core::models::UserMoodProfile;
use moodcast_core::pattern::PersonalPattern;
use moodcast_core::traits::IPatternStorage;

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    patterns: Mutex<HashMap<String, String>>,
    profiles: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IPatternStorage for InMemoryStorage {
    fn load(&self, user_id: &str) -> MoodcastResult<Vec<PersonalPattern>> {
        let map = self
            .patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match map.get(user_id) {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, user_id: &str, patterns: &[PersonalPattern]) -> MoodcastResult<()> {
        let json = serde_json::to_string(patterns)?;
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.to_string(), json);
        Ok(())
    }

    fn load_profile(&self, user_id: &str) -> MoodcastResult<Option<UserMoodProfile>> {
        let map = self
            .profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match map.get(user_id) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save_profile(&self, profile: &UserMoodProfile) -> MoodcastResult<()> {
        let json = serde_json::to_string(profile)?;
        self.profiles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.user_id.clone(), json);
        Ok(())
    }

    fn clear(&self, user_id: &str) -> MoodcastResult<()> {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id);
        Ok(())
    }
}
