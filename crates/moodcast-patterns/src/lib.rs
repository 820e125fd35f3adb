//! # moodcast-patterns
//!
//! The Pattern Model & Store: owns the canonical set of a user's personal
//! patterns and occupation, merges local and cloud copies by confidence,
//! and answers "which patterns apply to date D".
//!
//! Local-first by design: every read and write completes synchronously
//! against local storage; cloud operations are advisory, fire-and-forget,
//! and independently retryable. A full cloud outage degrades
//! personalization freshness but never breaks prediction.

pub mod local;
pub mod merge;
pub mod store;
pub mod sync;

pub use local::InMemoryStorage;
pub use merge::MergeOutcome;
pub use store::PatternStore;
pub use sync::SyncReport;
