use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LifeGridError, LifeGridResult};

/// Average Gregorian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Average weeks per year.
pub const WEEKS_PER_YEAR: f64 = 52.1775;
/// Average month length in days.
pub const DAYS_PER_MONTH: f64 = 30.44;
/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Display granularity of the grid: one cell is one unit of this size.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeGranularity {
    /// One cell per hour.
    Hours,
    /// One cell per day.
    Days,
    /// One cell per week.
    Weeks,
    /// One cell per month.
    Months,
    /// One cell per year.
    #[default]
    Years,
}

impl TimeGranularity {
    /// All granularities, finest first.
    pub const ALL: [Self; 5] = [
        Self::Hours,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
    ];

    /// Units of this granularity in one (average) day.
    pub fn units_per_day(self) -> f64 {
        match self {
            Self::Hours => HOURS_PER_DAY,
            Self::Days => 1.0,
            Self::Weeks => WEEKS_PER_YEAR / DAYS_PER_YEAR,
            Self::Months => 1.0 / DAYS_PER_MONTH,
            Self::Years => 1.0 / DAYS_PER_YEAR,
        }
    }

    /// Units of this granularity in one (average) year.
    pub fn units_per_year(self) -> f64 {
        match self {
            Self::Weeks => WEEKS_PER_YEAR,
            Self::Years => 1.0,
            other => other.units_per_day() * DAYS_PER_YEAR,
        }
    }

    /// Convert a span of years into this granularity.
    pub fn years_to_units(self, years: f64) -> f64 {
        years * self.units_per_year()
    }

    /// Convert a span in this granularity back into years.
    pub fn units_to_years(self, units: f64) -> f64 {
        units / self.units_per_year()
    }

    /// Stable lowercase name (`"weeks"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    /// Unit label for a count, singular only for exactly one.
    pub fn unit_label(self, value: f64) -> &'static str {
        let singular = match self {
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Months => "month",
            Self::Years => "year",
        };
        if value == 1.0 { singular } else { self.as_str() }
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeGranularity {
    type Err = LifeGridError;

    fn from_str(s: &str) -> LifeGridResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hours" | "hour" => Ok(Self::Hours),
            "days" | "day" => Ok(Self::Days),
            "weeks" | "week" => Ok(Self::Weeks),
            "months" | "month" => Ok(Self::Months),
            "years" | "year" => Ok(Self::Years),
            other => Err(LifeGridError::validation(format!(
                "unknown time granularity \"{other}\""
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/granularity.rs"]
mod tests;
