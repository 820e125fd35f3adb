use chrono::{NaiveDate, Weekday};
use moodcast_core::models::{MoodScore, Season};
use moodcast_core::pattern::{
    Confidence, ConfidenceBand, MonthDay, MoodImpact, Occupation, PatternType, PersonalPattern,
};

fn significant_date_pattern(month: u32, day: u32) -> PersonalPattern {
    let mut p = PersonalPattern::new(
        "user-1",
        PatternType::SignificantDate,
        "Anniversary",
        "A loss anniversary",
        MoodImpact::new(-1.5),
        Confidence::new(0.7),
    );
    p.month_day = MonthDay::new(month, day);
    p
}

#[test]
fn pattern_round_trip_preserves_all_fields() {
    let mut p = significant_date_pattern(3, 15);
    p.extracted_from_entry_id = Some("entry-42".to_string());
    p.extracted_snippet = Some("it's been a year since...".to_string());

    let json = serde_json::to_string(&p).unwrap();
    let back: PersonalPattern = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, p.id);
    assert_eq!(back.pattern_type, PatternType::SignificantDate);
    assert_eq!(back.month_day, MonthDay::new(3, 15));
    assert_eq!(back.mood_impact, MoodImpact::new(-1.5));
    assert_eq!(back.confidence, Confidence::new(0.7));
    assert_eq!(back.extracted_from_entry_id.as_deref(), Some("entry-42"));
    assert_eq!(back.created_at, p.created_at);
}

#[test]
fn absent_optionals_stay_absent_in_serialized_form() {
    let p = PersonalPattern::new(
        "user-1",
        PatternType::SeasonalPattern,
        "Winter dip",
        "Mood drops in winter",
        MoodImpact::new(-0.8),
        Confidence::new(0.6),
    );

    let json = serde_json::to_value(&p).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("day_of_week"));
    assert!(!obj.contains_key("month_day"));
    assert!(!obj.contains_key("occupation"));
    assert!(!obj.contains_key("trigger_keywords"));
    assert!(!obj.contains_key("last_validated"));

    let back: PersonalPattern = serde_json::from_value(json).unwrap();
    assert!(back.day_of_week.is_none());
    assert!(back.month_day.is_none());
}

#[test]
fn significant_date_matches_any_year_and_nothing_else() {
    let p = significant_date_pattern(3, 15);
    assert!(p.applies_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    assert!(p.applies_on(NaiveDate::from_ymd_opt(2031, 3, 15).unwrap()));
    assert!(!p.applies_on(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()));
    assert!(!p.applies_on(NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()));
}

#[test]
fn weekday_pattern_matches_on_weekday_equality() {
    let mut p = PersonalPattern::new(
        "user-1",
        PatternType::WeekdayPreference,
        "Monday dread",
        "Mondays are rough",
        MoodImpact::new(-1.0),
        Confidence::new(0.6),
    );
    p.day_of_week = Some(2); // Monday (1 = Sunday)

    // 2025-06-02 is a Monday.
    assert!(p.applies_on(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    assert!(!p.applies_on(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()));
}

#[test]
fn month_day_rolls_to_next_year_when_passed() {
    let md = MonthDay::new(3, 15).unwrap();
    let after = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let next = md.next_occurrence(after).unwrap();
    assert_eq!(next, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    assert_eq!(md.days_until(after), Some((next - after).num_days()));
}

#[test]
fn feb_29_rolls_to_next_leap_year() {
    let md = MonthDay::new(2, 29).unwrap();
    let after = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert_eq!(
        md.next_occurrence(after),
        NaiveDate::from_ymd_opt(2028, 2, 29)
    );
}

#[test]
fn invalid_month_day_is_rejected() {
    assert!(MonthDay::new(2, 30).is_none());
    assert!(MonthDay::new(13, 1).is_none());
    assert!(MonthDay::new(4, 31).is_none());
}

#[test]
fn employee_curve_is_negative_monday_positive_friday() {
    let occ = Occupation::Employee;
    assert!(occ.weekday_impact(Weekday::Mon) < -0.5);
    assert!(occ.weekday_impact(Weekday::Fri) > 0.5);
    assert!(occ.weekday_impact(Weekday::Fri) > occ.weekday_impact(Weekday::Mon));
}

#[test]
fn unknown_occupation_curve_is_flat() {
    for wd in [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ] {
        assert_eq!(Occupation::Unknown.weekday_impact(wd), 0.0);
    }
}

#[test]
fn occupation_parse_accepts_known_labels_only() {
    assert_eq!(Occupation::parse("Employee"), Some(Occupation::Employee));
    assert_eq!(
        Occupation::parse("business owner"),
        Some(Occupation::BusinessOwner)
    );
    assert_eq!(Occupation::parse("astronaut-wizard"), None);
}

#[test]
fn confidence_bands_match_thresholds() {
    assert_eq!(Confidence::new(0.85).band(), ConfidenceBand::High);
    assert_eq!(Confidence::new(0.8).band(), ConfidenceBand::High);
    assert_eq!(Confidence::new(0.7).band(), ConfidenceBand::Medium);
    assert_eq!(Confidence::new(0.59).band(), ConfidenceBand::Low);
}

#[test]
fn season_mapping_is_northern_hemisphere() {
    assert_eq!(Season::from_month(4), Season::Spring);
    assert_eq!(Season::from_month(7), Season::Summer);
    assert_eq!(Season::from_month(10), Season::Fall);
    assert_eq!(Season::from_month(1), Season::Winter);
    assert_eq!(Season::from_month(12), Season::Winter);
}

#[test]
fn non_finite_mood_score_collapses_to_neutral() {
    assert_eq!(MoodScore::new(f64::NAN), MoodScore::NEUTRAL);
    assert_eq!(MoodScore::new(f64::INFINITY), MoodScore::NEUTRAL);
}
