use serde::{Deserialize, Serialize};

use super::defaults;

/// Extraction subsystem configuration. Throttling policy (how often a
/// batch is submitted) belongs to the caller, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Cap on entries submitted to the collaborator in one call.
    pub max_entries_per_batch: usize,
    /// Cap on the provenance snippet stored with a pattern.
    pub max_snippet_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_entries_per_batch: defaults::DEFAULT_MAX_ENTRIES_PER_BATCH,
            max_snippet_chars: defaults::DEFAULT_MAX_SNIPPET_CHARS,
        }
    }
}
