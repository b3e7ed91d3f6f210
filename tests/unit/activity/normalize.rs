use super::*;
use crate::activity::model::{ActivityId, RatePeriod};
use crate::foundation::core::Rgb8;

fn activity(rate: f64, period: RatePeriod) -> Activity {
    Activity::new(ActivityId(1), "a", rate, period, Rgb8::new(1, 2, 3))
}

#[test]
fn periods_divide_by_flat_day_counts() {
    assert_eq!(hours_per_day(&activity(8.0, RatePeriod::Day)), 8.0);
    assert_eq!(hours_per_day(&activity(14.0, RatePeriod::Week)), 2.0);
    assert_eq!(hours_per_day(&activity(15.0, RatePeriod::Month)), 0.5);
    assert!((hours_per_day(&activity(24.0, RatePeriod::Year)) - 24.0 / 365.0).abs() < 1e-12);
}

#[test]
fn out_of_range_rates_are_clamped_before_dividing() {
    let mut a = activity(8.0, RatePeriod::Day);
    a.rate_hours = 40.0;
    assert_eq!(hours_per_day(&a), 24.0);
    a.rate_hours = -3.0;
    assert_eq!(hours_per_day(&a), 0.0);
    a.rate_hours = f64::NAN;
    assert_eq!(hours_per_day(&a), 0.0);
}

#[test]
fn day_fraction_is_hours_over_twenty_four() {
    assert!((day_fraction(&activity(8.0, RatePeriod::Day)) - 1.0 / 3.0).abs() < 1e-12);
}
