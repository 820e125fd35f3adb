//! Static calendar windows: holiday anticipation, the new-year period,
//! and tax season. These are generic time-of-year heuristics, not
//! user-specific dates — those live in the pattern store.

use chrono::{Datelike, NaiveDate};

use moodcast_core::constants::CALENDAR_SCALE;
use moodcast_core::models::{ContextFactor, FactorKind};
use moodcast_core::pattern::MonthDay;

/// Major holidays checked for the anticipation window.
const MAJOR_HOLIDAYS: [(u32, u32, &str); 5] = [
    (1, 1, "New Year's Day"),
    (2, 14, "Valentine's Day"),
    (7, 4, "Independence Day"),
    (10, 31, "Halloween"),
    (12, 25, "Christmas"),
];

/// Days ahead at which holiday anticipation starts to register.
const HOLIDAY_WINDOW_DAYS: i64 = 7;

/// All static calendar-window factors for a date. Empty when no window
/// applies.
pub fn calendar_factors(date: NaiveDate) -> Vec<ContextFactor> {
    let mut factors = Vec::new();

    if let Some(name) = approaching_holiday(date) {
        factors.push(ContextFactor {
            name: "Holiday anticipation".to_string(),
            kind: FactorKind::Calendar,
            raw_impact: 0.3,
            multiplier: CALENDAR_SCALE,
            description: format!("{name} is coming up, which tends to lift spirits"),
        });
    }

    if in_new_year_period(date) {
        factors.push(ContextFactor {
            name: "New year period".to_string(),
            kind: FactorKind::Calendar,
            raw_impact: 0.2,
            multiplier: CALENDAR_SCALE,
            description: "Fresh-start energy around the turn of the year".to_string(),
        });
    }

    if in_tax_season(date) {
        factors.push(ContextFactor {
            name: "Tax season".to_string(),
            kind: FactorKind::Calendar,
            raw_impact: -0.3,
            multiplier: CALENDAR_SCALE,
            description: "Tax season tends to add background stress".to_string(),
        });
    }

    factors
}

/// The nearest major holiday within the anticipation window, if any.
/// Day-of counts as anticipation too.
fn approaching_holiday(date: NaiveDate) -> Option<&'static str> {
    MAJOR_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| {
            let md = MonthDay::new(month, day)?;
            let days = md.days_until(date)?;
            (0..=HOLIDAY_WINDOW_DAYS).contains(&days).then_some((days, name))
        })
        .min_by_key(|&(days, _)| days)
        .map(|(_, name)| name)
}

/// Dec 26 through Jan 7.
fn in_new_year_period(date: NaiveDate) -> bool {
    matches!(
        (date.month(), date.day()),
        (12, 26..=31) | (1, 1..=7)
    )
}

/// Mar 1 through Apr 15.
fn in_tax_season(date: NaiveDate) -> bool {
    matches!((date.month(), date.day()), (3, _) | (4, 1..=15))
}
