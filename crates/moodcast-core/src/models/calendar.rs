use serde::{Deserialize, Serialize};
use std::fmt;

/// Meteorological season, Northern-hemisphere convention.
///
/// Known limitation: the month-to-season mapping is hardcoded for the
/// Northern hemisphere; there is no hemisphere detection or configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season for a calendar month (1-12).
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Fixed seasonal mood delta.
    pub fn mood_delta(self) -> f64 {
        match self {
            Season::Spring => 0.5,
            Season::Summer => 0.7,
            Season::Fall => 0.0,
            Season::Winter => -0.4,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        };
        write!(f, "{s}")
    }
}

/// Approximate lunar phase. Intentionally a weak, low-confidence factor:
/// only full and new moon carry any delta at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn mood_delta(self) -> f64 {
        match self {
            MoonPhase::Full => -0.2,
            MoonPhase::New => 0.1,
            _ => 0.0,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoonPhase::New => "new moon",
            MoonPhase::WaxingCrescent => "waxing crescent",
            MoonPhase::FirstQuarter => "first quarter",
            MoonPhase::WaxingGibbous => "waxing gibbous",
            MoonPhase::Full => "full moon",
            MoonPhase::WaningGibbous => "waning gibbous",
            MoonPhase::LastQuarter => "last quarter",
            MoonPhase::WaningCrescent => "waning crescent",
        };
        write!(f, "{s}")
    }
}
