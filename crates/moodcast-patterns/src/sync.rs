//! Cloud merge-sync report types.

/// Summary of one cloud sync cycle. Purely informational; sync never
/// mutates local state on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Remote patterns pulled.
    pub pulled: usize,
    /// Remote patterns appended locally (no incumbent at their key).
    pub added: usize,
    /// Remote patterns that beat a local incumbent.
    pub replaced: usize,
    /// Remote patterns discarded by the confidence rule.
    pub discarded: usize,
    /// True when the cloud was unreachable and the cycle was skipped.
    pub skipped: bool,
    /// True when the occupation was pushed to the remote store.
    pub pushed_occupation: bool,
}

impl SyncReport {
    /// Report for a cycle abandoned because the cloud was unreachable.
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}
