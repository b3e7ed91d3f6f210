use serde::{Deserialize, Serialize};

use crate::activity::model::{Activity, ActivityId};
use crate::activity::normalize::day_fraction;
use crate::allocate::walk::Side;
use crate::calendar::counts::UnitCounts;
use crate::foundation::math::percent_of;

/// Units of the remaining lifespan already committed to future activities.
pub fn future_commitment(counts: &UnitCounts, activities: &[Activity]) -> f64 {
    activities
        .iter()
        .filter(|a| a.applies_to(Side::Future))
        .map(|a| counts.remaining * day_fraction(a))
        .sum()
}

/// Progress figures shown alongside the grid.
///
/// `remaining` here is what is left after future commitments; `total` stays the lifespan, so
/// the three percentages only add up to 100 while commitments fit in the remaining time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Units lived.
    pub lived: f64,
    /// Uncommitted remaining units.
    pub remaining: f64,
    /// Remaining units claimed by future activities.
    pub future_committed: f64,
    /// Lifespan in units.
    pub total: f64,
    /// `lived / total`, may exceed 100.
    pub percentage_lived: f64,
    /// `future_committed / total`.
    pub percentage_future: f64,
    /// `remaining / total`.
    pub percentage_remaining: f64,
}

/// Progress figures for `counts` under the subtractive commitment model.
pub fn progress_stats(counts: &UnitCounts, activities: &[Activity]) -> ProgressStats {
    let future_committed = future_commitment(counts, activities);
    let remaining = (counts.remaining - future_committed).max(0.0);
    ProgressStats {
        lived: counts.lived,
        remaining,
        future_committed,
        total: counts.total,
        percentage_lived: percent_of(counts.lived, counts.total),
        percentage_future: percent_of(future_committed, counts.total),
        percentage_remaining: percent_of(remaining, counts.total),
    }
}

/// Time one activity takes out of the lived and remaining spans.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityUsage {
    /// Activity this row describes.
    pub id: ActivityId,
    /// Units of the lived span spent on it.
    pub past_units: f64,
    /// Units of the remaining span it will take.
    pub future_units: f64,
}

impl ActivityUsage {
    /// Past plus future units.
    pub fn total_units(&self) -> f64 {
        self.past_units + self.future_units
    }
}

/// Usage of every activity, in list order, whatever sides it is painted on.
pub fn activity_usage(counts: &UnitCounts, activities: &[Activity]) -> Vec<ActivityUsage> {
    activities
        .iter()
        .map(|a| {
            let share = day_fraction(a);
            ActivityUsage {
                id: a.id,
                past_units: counts.lived * share,
                future_units: counts.remaining * share,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/progress.rs"]
mod tests;
