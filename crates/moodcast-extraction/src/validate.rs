//! Validation of the collaborator's raw response into well-formed
//! pattern candidates.

use chrono::Utc;

use moodcast_core::models::LlmExtractionResponse;
use moodcast_core::pattern::{
    Confidence, MonthDay, MoodImpact, Occupation, PatternType, PersonalPattern,
};

/// Everything that survived validation for one response.
#[derive(Debug, Default)]
pub struct ValidatedCandidates {
    pub patterns: Vec<PersonalPattern>,
    /// Occupation classification, when present and parseable.
    pub occupation: Option<(Occupation, Confidence)>,
    pub summary: Option<String>,
    /// Candidates dropped at the boundary.
    pub rejected: usize,
}

/// Parse a weekday name to 1-7 (1 = Sunday). Case-insensitive; accepts
/// full names and 3-letter prefixes.
pub fn parse_weekday(name: &str) -> Option<u8> {
    let lower = name.trim().to_ascii_lowercase();
    let prefix = lower.get(..3)?;
    match prefix {
        "sun" => Some(1),
        "mon" => Some(2),
        "tue" => Some(3),
        "wed" => Some(4),
        "thu" => Some(5),
        "fri" => Some(6),
        "sat" => Some(7),
        _ => None,
    }
}

/// A polarity label that contradicts the impact sign wins: it is the
/// collaborator's explicit judgement, the sign may be a formatting slip.
fn reconcile_polarity(impact: f64, polarity: Option<&str>) -> f64 {
    match polarity.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        Some("positive") => impact.abs(),
        Some("negative") => -impact.abs(),
        _ => impact,
    }
}

fn truncate(s: String, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Validate one raw response into pattern candidates for `user_id`.
///
/// `provenance_entry_id` stamps every accepted candidate so it can be
/// audited or undone later.
pub fn validate_response(
    user_id: &str,
    response: LlmExtractionResponse,
    provenance_entry_id: Option<&str>,
    max_snippet_chars: usize,
) -> ValidatedCandidates {
    let mut out = ValidatedCandidates {
        summary: response.summary,
        ..ValidatedCandidates::default()
    };
    let now = Utc::now();

    let stamp = |mut p: PersonalPattern, snippet: Option<String>| {
        p.extracted_from_entry_id = provenance_entry_id.map(str::to_string);
        p.extracted_snippet = snippet.map(|s| truncate(s, max_snippet_chars));
        p.last_validated = Some(now);
        p
    };

    if let Some(raw) = response.occupation {
        match raw.occupation.as_deref().and_then(Occupation::parse) {
            Some(occupation) => {
                // Missing confidence on the classification defaults to
                // moderate; the classification itself is the signal.
                let confidence = Confidence::new(raw.confidence.unwrap_or(0.5));
                out.occupation = Some((occupation, confidence));
                let mut p = PersonalPattern::new(
                    user_id,
                    PatternType::OccupationType,
                    format!("Occupation: {occupation}"),
                    "Work-week rhythm inferred from journal entries",
                    MoodImpact::new(0.0),
                    confidence,
                );
                p.occupation = Some(occupation);
                out.patterns.push(stamp(p, raw.snippet));
            }
            None => {
                out.rejected += 1;
                tracing::warn!(
                    label = ?raw.occupation,
                    "rejected occupation candidate: unparseable label"
                );
            }
        }
    }

    for raw in response.significant_dates {
        let month_day = match (raw.month, raw.day) {
            (Some(m), Some(d)) => MonthDay::new(m, d),
            _ => None,
        };
        let (Some(month_day), Some(impact), Some(confidence)) =
            (month_day, raw.impact, raw.confidence)
        else {
            out.rejected += 1;
            tracing::warn!(
                month = ?raw.month,
                day = ?raw.day,
                "rejected significant-date candidate: invalid date or missing fields"
            );
            continue;
        };
        let impact = reconcile_polarity(impact, raw.polarity.as_deref());
        let description = raw
            .description
            .unwrap_or_else(|| "A date that matters every year".to_string());
        let mut p = PersonalPattern::new(
            user_id,
            PatternType::SignificantDate,
            format!("Significant date ({month_day})"),
            description,
            MoodImpact::new(impact),
            Confidence::new(confidence),
        );
        p.month_day = Some(month_day);
        out.patterns.push(stamp(p, raw.snippet));
    }

    for raw in response.weekday_patterns {
        let day_of_week = raw.day_name.as_deref().and_then(parse_weekday);
        let (Some(day_of_week), Some(impact), Some(confidence)) =
            (day_of_week, raw.impact, raw.confidence)
        else {
            out.rejected += 1;
            tracing::warn!(
                day_name = ?raw.day_name,
                "rejected weekday candidate: unparseable day or missing fields"
            );
            continue;
        };
        let description = raw
            .description
            .unwrap_or_else(|| "A recurring weekday mood".to_string());
        let mut p = PersonalPattern::new(
            user_id,
            PatternType::WeekdayPreference,
            format!("Weekday pattern ({})", weekday_name(day_of_week)),
            description,
            MoodImpact::new(impact),
            Confidence::new(confidence),
        );
        p.day_of_week = Some(day_of_week);
        out.patterns.push(stamp(p, raw.snippet));
    }

    for raw in response.trigger_groups {
        let keywords: Vec<String> = raw
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        let (false, Some(impact), Some(confidence)) =
            (keywords.is_empty(), raw.impact, raw.confidence)
        else {
            out.rejected += 1;
            tracing::warn!("rejected trigger candidate: no keywords or missing fields");
            continue;
        };
        let description = raw
            .description
            .unwrap_or_else(|| "Topics that move your mood when they come up".to_string());
        let mut p = PersonalPattern::new(
            user_id,
            PatternType::RecurringTrigger,
            format!("Trigger: {}", keywords.join(", ")),
            description,
            MoodImpact::new(impact),
            Confidence::new(confidence),
        );
        p.trigger_keywords = Some(keywords);
        out.patterns.push(stamp(p, raw.snippet));
    }

    out
}

fn weekday_name(day: u8) -> &'static str {
    match day {
        1 => "Sunday",
        2 => "Monday",
        3 => "Tuesday",
        4 => "Wednesday",
        5 => "Thursday",
        6 => "Friday",
        _ => "Saturday",
    }
}
