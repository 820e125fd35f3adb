use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::impact::MoodImpact;
use super::month_day::MonthDay;
use super::occupation::Occupation;
use super::types::PatternType;

/// Key identifying the slot a pattern occupies in a user's pattern set.
/// Exactly one pattern may exist per key after merge; duplicates are
/// resolved by keeping the higher-confidence record.
pub type MergeKey = (PatternType, Option<u8>, Option<MonthDay>);

/// The durable unit of learned personalization. Created by the extraction
/// adapter from journal text, or by direct user action (explicit occupation
/// selection), and matched against target dates at prediction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalPattern {
    /// UUID v4 identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Discriminant; determines which optional fields below are meaningful.
    pub pattern_type: PatternType,
    /// Human-readable label (may be LLM-generated).
    pub name: String,
    /// Human-readable rationale.
    pub description: String,
    /// Signed mood contribution on days the pattern applies.
    pub mood_impact: MoodImpact,
    /// Trust in this pattern; tie-breaker on merge and input to predicted
    /// confidence.
    pub confidence: Confidence,
    /// 1-7, 1 = Sunday. Only for `WeekdayPreference`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub day_of_week: Option<u8>,
    /// Year-agnostic recurring date. Only for `SignificantDate`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub month_day: Option<MonthDay>,
    /// Only for `OccupationType` patterns.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub occupation: Option<Occupation>,
    /// Only for `RecurringTrigger`; matching policy is owned by the caller.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trigger_keywords: Option<Vec<String>>,
    /// Provenance: entry that produced this pattern.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extracted_from_entry_id: Option<String>,
    /// Provenance: text span that produced this pattern.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extracted_snippet: Option<String>,
    /// When the pattern was first created.
    pub created_at: DateTime<Utc>,
    /// When the pattern was last reconfirmed by fresh extraction.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_validated: Option<DateTime<Utc>>,
}

impl PersonalPattern {
    /// Construct a pattern with a fresh UUID and creation timestamp.
    /// `mood_impact` and `confidence` are clamped by their newtypes, so a
    /// pattern can never be constructed outside its documented ranges.
    pub fn new(
        user_id: impl Into<String>,
        pattern_type: PatternType,
        name: impl Into<String>,
        description: impl Into<String>,
        mood_impact: MoodImpact,
        confidence: Confidence,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            pattern_type,
            name: name.into(),
            description: description.into(),
            mood_impact,
            confidence,
            day_of_week: None,
            month_day: None,
            occupation: None,
            trigger_keywords: None,
            extracted_from_entry_id: None,
            extracted_snippet: None,
            created_at: Utc::now(),
            last_validated: None,
        }
    }

    /// The slot this pattern occupies in the merge invariant.
    pub fn merge_key(&self) -> MergeKey {
        (self.pattern_type, self.day_of_week, self.month_day)
    }

    /// Whether this pattern's date matcher fires for `date`.
    ///
    /// `WeekdayPreference` matches on day-of-week equality,
    /// `SignificantDate` on (month, day) equality year-agnostically, and
    /// `OccupationType` patterns always apply (their impact is
    /// day-dependent, computed from the occupation curve elsewhere).
    /// Seasonal and trigger patterns are not date-matched here.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        match self.pattern_type {
            PatternType::WeekdayPreference => {
                let weekday = date.weekday().num_days_from_sunday() as u8 + 1;
                self.day_of_week == Some(weekday)
            }
            PatternType::SignificantDate => {
                self.month_day.is_some_and(|md| md.matches(date))
            }
            PatternType::OccupationType => true,
            PatternType::SeasonalPattern | PatternType::RecurringTrigger => false,
        }
    }
}

/// Identity equality: two patterns are equal if they have the same ID.
impl PartialEq for PersonalPattern {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
