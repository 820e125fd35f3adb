//! # moodcast-extraction
//!
//! The Pattern Extraction Adapter: converts raw journal text into zero or
//! more personal-pattern candidates via the text-understanding
//! collaborator, and reconciles them into the pattern store.
//!
//! The collaborator's response is untrusted structured output. Everything
//! crosses a parse-then-validate boundary: malformed day names,
//! out-of-range impacts, and missing confidence are rejected or clamped
//! candidate by candidate, never propagated as invalid state, and one bad
//! candidate never aborts the rest of the batch.

pub mod adapter;
pub mod validate;

pub use adapter::{ExtractionAdapter, ExtractionOutcome};
