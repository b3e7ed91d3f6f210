use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at_midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

fn params(g: TimeGranularity) -> LifeParameters {
    LifeParameters::new(date(2000, 1, 1), 80, g, at_midnight(2025, 1, 1)).unwrap()
}

#[test]
fn years_count_completed_birthdays() {
    let c = unit_counts(&params(TimeGranularity::Years));
    assert_eq!(c.lived, 25.0);
    assert_eq!(c.total, 80.0);
    assert_eq!(c.remaining, 55.0);
}

#[test]
fn birthday_not_complete_until_month_and_day_reached() {
    let birth = date(2000, 6, 15);
    assert_eq!(completed_years(birth, at_midnight(2025, 6, 14)), 24);
    assert_eq!(completed_years(birth, at_midnight(2025, 6, 15)), 25);
    assert_eq!(completed_years(birth, at_midnight(2025, 5, 20)), 24);
}

#[test]
fn leap_day_birthday_completes_on_first_of_march() {
    let birth = date(2000, 2, 29);
    assert_eq!(completed_years(birth, at_midnight(2001, 2, 28)), 0);
    assert_eq!(completed_years(birth, at_midnight(2001, 3, 1)), 1);
}

#[test]
fn days_use_exact_elapsed_time() {
    let c = unit_counts(&params(TimeGranularity::Days));
    assert!((c.lived - 9132.0).abs() < 1e-9);
    assert!((c.total - 29220.0).abs() < 1e-9);
    assert!((c.remaining - (29220.0 - 9132.0)).abs() < 1e-9);

    let half_day = LifeParameters {
        reference_now: date(2000, 1, 1).and_hms_opt(12, 0, 0).unwrap(),
        ..params(TimeGranularity::Hours)
    };
    assert!((unit_counts(&half_day).lived - 12.0).abs() < 1e-9);
}

#[test]
fn birth_equal_to_now_has_nothing_lived() {
    for g in TimeGranularity::ALL {
        let p = LifeParameters::new(date(2025, 1, 1), 80, g, at_midnight(2025, 1, 1)).unwrap();
        let c = unit_counts(&p);
        assert_eq!(c.lived, 0.0, "{g}");
        assert!((c.remaining - c.total).abs() < 1e-9, "{g}");
    }
}

#[test]
fn future_birth_date_is_clamped_to_zero_lived() {
    let p = LifeParameters::new(
        date(2030, 1, 1),
        80,
        TimeGranularity::Weeks,
        at_midnight(2025, 1, 1),
    )
    .unwrap();
    let c = unit_counts(&p);
    assert_eq!(c.lived, 0.0);
    assert!(c.remaining >= 0.0);
}

#[test]
fn exceeded_lifespan_keeps_true_lived_value() {
    let p = LifeParameters::new(
        date(1900, 1, 1),
        80,
        TimeGranularity::Years,
        at_midnight(2025, 1, 1),
    )
    .unwrap();
    let c = unit_counts(&p);
    assert_eq!(c.lived, 125.0);
    assert_eq!(c.remaining, 0.0);
    assert!(c.lifespan_exceeded());
    assert!(c.percentage_lived() > 100.0);
}

#[test]
fn total_is_lived_plus_remaining_before_lifespan_ends() {
    for g in TimeGranularity::ALL {
        let c = unit_counts(&params(g));
        assert!((c.total - (c.lived + c.remaining)).abs() < 1e-6, "{g}");
    }
}

#[test]
fn lived_is_monotonic_in_reference_now() {
    for g in TimeGranularity::ALL {
        let mut prev = -1.0;
        for day in 0..400 {
            let now = at_midnight(2024, 6, 1) + chrono::Duration::days(day);
            let p = LifeParameters {
                reference_now: now,
                ..params(g)
            };
            let lived = unit_counts(&p).lived;
            assert!(lived >= prev, "{g} regressed at day {day}");
            prev = lived;
        }
    }
}

#[test]
fn rejects_out_of_range_lifespan() {
    let now = at_midnight(2025, 1, 1);
    assert!(LifeParameters::new(date(2000, 1, 1), 0, TimeGranularity::Years, now).is_err());
    assert!(
        LifeParameters::new(date(2000, 1, 1), MAX_LIFESPAN_YEARS + 1, TimeGranularity::Years, now)
            .is_err()
    );
    assert!(
        LifeParameters::new(date(2000, 1, 1), MAX_LIFESPAN_YEARS, TimeGranularity::Years, now)
            .is_ok()
    );
}
