use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for a personal pattern. Determines which optional fields
/// are meaningful and how the pattern is matched against a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// The user's occupation; carries a built-in day-of-week impact curve.
    OccupationType,
    /// Recurring sentiment tied to a day of the week.
    WeekdayPreference,
    /// A (month, day) anniversary that recurs every year.
    SignificantDate,
    /// Broad seasonal mood shift; matched by season, not by exact date.
    SeasonalPattern,
    /// Keyword-triggered pattern; matching policy is owned by the caller.
    RecurringTrigger,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternType::OccupationType => "occupation_type",
            PatternType::WeekdayPreference => "weekday_preference",
            PatternType::SignificantDate => "significant_date",
            PatternType::SeasonalPattern => "seasonal_pattern",
            PatternType::RecurringTrigger => "recurring_trigger",
        };
        write!(f, "{s}")
    }
}
