use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Hour,
    Week,
    Month,
}

impl DurationUnit {
    /// Points when the count is unknown.
    fn unparsed_points(self) -> f64 {
        match self {
            DurationUnit::Week => 2.0,
            DurationUnit::Month => 3.0,
            DurationUnit::Hour => 1.0,
        }
    }

    fn tier_points(self, count: u32) -> f64 {
        match self {
            DurationUnit::Week => match count {
                10.. => 5.0,
                6..=9 => 4.0,
                4..=5 => 3.0,
                2..=3 => 2.0,
                _ => 1.0,
            },
            DurationUnit::Month => match count {
                6.. => 5.0,
                3..=5 => 4.0,
                2 => 3.0,
                _ => 2.0,
            },
            DurationUnit::Hour => match count {
                40.. => 3.0,
                20..=39 => 2.0,
                _ => 1.0,
            },
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DurationUnit::Hour => "hour",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
        };
        write!(f, "{}", s)
    }
}

/// Course length as `{count, unit}`, either supplied directly or parsed from
/// free text such as "12 months" or "approx. 40 hours to complete".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseDuration {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub unit: Option<DurationUnit>,
}

/// Points when no unit can be identified.
pub const UNKNOWN_DURATION_POINTS: f64 = 2.0;

/// Unit keywords in precedence order: the first one present wins.
const UNIT_KEYWORDS: [(&str, DurationUnit); 3] = [
    ("week", DurationUnit::Week),
    ("month", DurationUnit::Month),
    ("hour", DurationUnit::Hour),
];

impl CourseDuration {
    pub fn new(count: u32, unit: DurationUnit) -> Self {
        Self {
            count: Some(count),
            unit: Some(unit),
        }
    }

    /// Parse free-form duration text.
    ///
    /// The unit is the first of "week", "month", "hour" (in that order) found
    /// anywhere in the lowercased text. The count is the first run of ASCII
    /// digits, so "10-12 weeks" reads as 10 weeks. Runs too large for `u32`
    /// count as missing.
    pub fn parse(s: &str) -> Self {
        let lower = s.to_lowercase();
        let unit = UNIT_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, unit)| *unit);

        let count = lower
            .split(|c: char| !c.is_ascii_digit())
            .find(|run| !run.is_empty())
            .and_then(|run| run.parse().ok());

        Self { count, unit }
    }

    /// Duration points, 0-5.
    pub fn points(&self) -> f64 {
        match (self.unit, self.count) {
            (None, _) => UNKNOWN_DURATION_POINTS,
            (Some(unit), None) => unit.unparsed_points(),
            (Some(unit), Some(count)) => unit.tier_points(count),
        }
    }
}

impl fmt::Display for CourseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.count, self.unit) {
            (Some(count), Some(unit)) if count == 1 => write!(f, "1 {}", unit),
            (Some(count), Some(unit)) => write!(f, "{} {}s", count, unit),
            (None, Some(unit)) => write!(f, "? {}s", unit),
            (Some(count), None) => write!(f, "{} (unknown unit)", count),
            (None, None) => write!(f, "unknown"),
        }
    }
}
