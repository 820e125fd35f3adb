use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pattern::Occupation;

/// Compact profile summary. Pure cache: derivable from the pattern set
/// plus raw entries, so it carries no invariants of its own beyond "can
/// always be rebuilt from source data."
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMoodProfile {
    pub user_id: String,
    #[serde(default)]
    pub occupation: Occupation,
    /// Compressed free-text summary from the extraction collaborator.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub llm_summary: Option<String>,
    #[serde(default)]
    pub total_entries_analyzed: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_extraction_date: Option<DateTime<Utc>>,
}

impl UserMoodProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            occupation: Occupation::Unknown,
            llm_summary: None,
            total_entries_analyzed: 0,
            last_extraction_date: None,
        }
    }
}
