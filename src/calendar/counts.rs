use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::granularity::TimeGranularity;
use crate::foundation::error::{LifeGridError, LifeGridResult};
use crate::foundation::math::percent_of;

/// Largest accepted lifespan, in years.
pub const MAX_LIFESPAN_YEARS: u32 = 130;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Inputs of the calendar math.
///
/// `reference_now` is injected rather than read from a clock so every computation is a pure
/// function of its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifeParameters {
    /// Date of birth (local midnight).
    pub birth_date: NaiveDate,
    /// Target lifespan in whole years, `1..=MAX_LIFESPAN_YEARS`.
    pub lifespan_years: u32,
    /// Display granularity.
    #[serde(default)]
    pub granularity: TimeGranularity,
    /// The local wall-clock instant treated as "now".
    pub reference_now: NaiveDateTime,
}

impl LifeParameters {
    /// Create validated parameters.
    pub fn new(
        birth_date: NaiveDate,
        lifespan_years: u32,
        granularity: TimeGranularity,
        reference_now: NaiveDateTime,
    ) -> LifeGridResult<Self> {
        let params = Self {
            birth_date,
            lifespan_years,
            granularity,
            reference_now,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the lifespan bounds.
    pub fn validate(&self) -> LifeGridResult<()> {
        if self.lifespan_years == 0 {
            return Err(LifeGridError::validation("lifespan_years must be >= 1"));
        }
        if self.lifespan_years > MAX_LIFESPAN_YEARS {
            return Err(LifeGridError::validation(format!(
                "lifespan_years must be <= {MAX_LIFESPAN_YEARS}, got {}",
                self.lifespan_years
            )));
        }
        Ok(())
    }

    /// Same parameters viewed at another granularity.
    pub fn with_granularity(&self, granularity: TimeGranularity) -> Self {
        Self {
            granularity,
            ..self.clone()
        }
    }
}

/// Lived / remaining / total time in units of one granularity.
///
/// Counts are rational: unit conversions rarely divide evenly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCounts {
    /// Units elapsed since birth.
    pub lived: f64,
    /// Units left until the lifespan is reached, never negative.
    pub remaining: f64,
    /// Lifespan in units.
    pub total: f64,
}

impl UnitCounts {
    /// Share of the lifespan already lived, in percent. May exceed 100.
    pub fn percentage_lived(&self) -> f64 {
        percent_of(self.lived, self.total)
    }

    /// `true` once `lived` has passed `total`.
    pub fn lifespan_exceeded(&self) -> bool {
        self.lived > self.total
    }
}

/// Compute lived, remaining and total units for `params`.
#[tracing::instrument]
pub fn unit_counts(params: &LifeParameters) -> UnitCounts {
    let g = params.granularity;
    let total = g.years_to_units(f64::from(params.lifespan_years));
    let lived = match g {
        TimeGranularity::Years => f64::from(completed_years(params.birth_date, params.reference_now)),
        _ => elapsed_days(params.birth_date, params.reference_now) * g.units_per_day(),
    };
    let remaining = (total - lived).max(0.0);
    if lived > total {
        tracing::debug!(lived, total, "lifespan exceeded, remaining clamped to zero");
    }
    UnitCounts {
        lived,
        remaining,
        total,
    }
}

/// Birthdays fully reached between `birth` and `now`; zero for a future birth date.
///
/// A year completes only once both the month and the day of the birthday have been reached, so
/// a 29 February birthday completes on 1 March in common years.
pub fn completed_years(birth: NaiveDate, now: NaiveDateTime) -> u32 {
    let today = now.date();
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Exact elapsed days from local midnight of `birth` to `now`, floored at zero.
pub fn elapsed_days(birth: NaiveDate, now: NaiveDateTime) -> f64 {
    let elapsed = now - birth.and_time(chrono::NaiveTime::MIN);
    (elapsed.num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/counts.rs"]
mod tests;
