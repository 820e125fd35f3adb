use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year-agnostic (month, day) pair for significant dates that recur
/// annually (anniversaries, birthdays, loss dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Construct a validated MonthDay. Returns `None` for combinations that
    /// are never a real calendar date. Feb 29 is accepted (valid in leap
    /// years).
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every legal (month, day) passes.
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    /// Whether `date` falls on this (month, day), any year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// Next occurrence on or after `from`, rolling into later years when
    /// the date has already passed. Feb 29 rolls forward to the next leap
    /// year.
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        (from.year()..=from.year() + 4)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .find(|d| *d >= from)
    }

    /// Days from `from` until the next occurrence.
    pub fn days_until(&self, from: NaiveDate) -> Option<i64> {
        self.next_occurrence(from).map(|d| (d - from).num_days())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
