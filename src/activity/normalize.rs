use crate::activity::input::clamp_rate_hours;
use crate::activity::model::Activity;

/// Hours per day an activity consumes.
///
/// Months are a flat 30 days and years 365 days; the allocator inherits this simplification.
/// The declared rate is clamped to `[0, 24]` first, the quotient is not clamped again.
pub fn hours_per_day(activity: &Activity) -> f64 {
    clamp_rate_hours(activity.rate_hours) / activity.rate_period.days()
}

/// Fraction of every day an activity consumes, in `[0, 1]`.
pub fn day_fraction(activity: &Activity) -> f64 {
    hours_per_day(activity) / 24.0
}

#[cfg(test)]
#[path = "../../tests/unit/activity/normalize.rs"]
mod tests;
