use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal entry as delivered by the persistence collaborator.
/// Immutable from this engine's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    /// Self-reported mood, 1-10.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mood: Option<u8>,
    /// Self-reported anxiety, 1-10.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub anxiety: Option<u8>,
    /// Self-reported stress, 1-10.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gratitude_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
}

impl JournalEntry {
    /// The mood score as f64, if the entry was scored.
    pub fn mood_score(&self) -> Option<f64> {
        self.mood.map(f64::from)
    }
}
