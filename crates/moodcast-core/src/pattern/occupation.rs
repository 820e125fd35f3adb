use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's occupation category. Each category carries a fixed
/// day-of-week impact curve: an employee dreads Monday and lifts on
/// Friday, a business owner tends to start the week energized and
/// flatten over the weekend, and so on.
///
/// The curves are static model content, not per-user data. A user's
/// personal weekday patterns (learned from journal text) stack on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Employee,
    BusinessOwner,
    Student,
    Freelancer,
    Unemployed,
    Retired,
    #[default]
    Unknown,
}

impl Occupation {
    /// Weekday impact curve, indexed Sunday..Saturday.
    fn curve(self) -> [f64; 7] {
        match self {
            // Sunday scaries, sharply negative Monday, sharply positive Friday.
            Occupation::Employee => [-0.3, -0.8, -0.2, 0.0, 0.2, 0.8, 0.5],
            // Positive Monday, flat-to-negative weekend.
            Occupation::BusinessOwner => [-0.2, 0.5, 0.3, 0.2, 0.2, 0.1, -0.1],
            Occupation::Student => [-0.2, -0.5, -0.1, 0.0, 0.1, 0.6, 0.7],
            Occupation::Freelancer => [0.1, 0.1, 0.0, 0.0, 0.0, 0.2, 0.1],
            Occupation::Unemployed => [0.1, -0.1, -0.1, -0.1, -0.1, 0.0, 0.1],
            Occupation::Retired => [0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1],
            Occupation::Unknown => [0.0; 7],
        }
    }

    /// Impact of this occupation on the given weekday.
    pub fn weekday_impact(self, weekday: Weekday) -> f64 {
        self.curve()[weekday.num_days_from_sunday() as usize]
    }

    /// Parse a free-text occupation label from the extraction collaborator.
    /// Case-insensitive; unknown labels map to `None` so the caller can
    /// reject rather than silently default.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "employee" | "employed" => Some(Occupation::Employee),
            "business_owner" | "business owner" | "businessowner" | "entrepreneur" => {
                Some(Occupation::BusinessOwner)
            }
            "student" => Some(Occupation::Student),
            "freelancer" | "freelance" | "self-employed" | "self employed" => {
                Some(Occupation::Freelancer)
            }
            "unemployed" => Some(Occupation::Unemployed),
            "retired" => Some(Occupation::Retired),
            "unknown" => Some(Occupation::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Occupation::Employee => "employee",
            Occupation::BusinessOwner => "business_owner",
            Occupation::Student => "student",
            Occupation::Freelancer => "freelancer",
            Occupation::Unemployed => "unemployed",
            Occupation::Retired => "retired",
            Occupation::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}
