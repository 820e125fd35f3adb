//! The personal-pattern data model: value objects, the pattern entity,
//! and the occupation impact curves.

pub mod base;
pub mod confidence;
pub mod impact;
pub mod month_day;
pub mod occupation;
pub mod types;

pub use base::{MergeKey, PersonalPattern};
pub use confidence::{Confidence, ConfidenceBand};
pub use impact::MoodImpact;
pub use month_day::MonthDay;
pub use occupation::Occupation;
pub use types::PatternType;
