//! Approximate lunar phase from the calendar date.
//!
//! Synodic-month arithmetic from a fixed new-moon epoch. Accurate to
//! within a day or so, which is plenty for a deliberately weak factor.

use chrono::NaiveDate;
use moodcast_core::models::MoonPhase;

/// Mean synodic month, days.
const SYNODIC_MONTH: f64 = 29.530588853;

/// Reference new moon: 2000-01-06.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).expect("fixed valid date")
}

/// Moon age in days for `date`, in [0, SYNODIC_MONTH).
fn moon_age(date: NaiveDate) -> f64 {
    let days = (date - epoch()).num_days() as f64;
    days.rem_euclid(SYNODIC_MONTH)
}

/// Approximate lunar phase for a date.
pub fn phase_for(date: NaiveDate) -> MoonPhase {
    // Eight equal slices of the cycle, centered on the principal phases.
    let age = moon_age(date);
    let slice = SYNODIC_MONTH / 8.0;
    if age < slice * 0.5 {
        MoonPhase::New
    } else if age < slice * 1.5 {
        MoonPhase::WaxingCrescent
    } else if age < slice * 2.5 {
        MoonPhase::FirstQuarter
    } else if age < slice * 3.5 {
        MoonPhase::WaxingGibbous
    } else if age < slice * 4.5 {
        MoonPhase::Full
    } else if age < slice * 5.5 {
        MoonPhase::WaningGibbous
    } else if age < slice * 6.5 {
        MoonPhase::LastQuarter
    } else if age < slice * 7.5 {
        MoonPhase::WaningCrescent
    } else {
        MoonPhase::New
    }
}
