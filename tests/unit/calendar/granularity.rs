use super::*;

#[test]
fn years_round_trip_through_every_granularity() {
    for g in TimeGranularity::ALL {
        let units = g.years_to_units(80.0);
        assert!((g.units_to_years(units) - 80.0).abs() < 1e-9, "{g}");
    }
}

#[test]
fn conversion_factors_match_calendar_averages() {
    assert!((TimeGranularity::Days.years_to_units(1.0) - 365.25).abs() < 1e-12);
    assert!((TimeGranularity::Weeks.years_to_units(1.0) - 52.1775).abs() < 1e-12);
    assert!((TimeGranularity::Hours.years_to_units(1.0) - 8766.0).abs() < 1e-9);
    assert!((TimeGranularity::Months.units_per_day() * 30.44 - 1.0).abs() < 1e-12);
}

#[test]
fn parses_and_labels() {
    assert_eq!(
        "Weeks".parse::<TimeGranularity>().unwrap(),
        TimeGranularity::Weeks
    );
    assert_eq!("day".parse::<TimeGranularity>().unwrap(), TimeGranularity::Days);
    assert!("fortnights".parse::<TimeGranularity>().is_err());

    assert_eq!(TimeGranularity::Years.unit_label(1.0), "year");
    assert_eq!(TimeGranularity::Years.unit_label(25.0), "years");
    assert_eq!(TimeGranularity::Months.unit_label(0.0), "months");
}

#[test]
fn serde_names_are_lowercase() {
    let v = serde_json::to_value(TimeGranularity::Months).unwrap();
    assert_eq!(v, serde_json::json!("months"));
    let g: TimeGranularity = serde_json::from_value(serde_json::json!("hours")).unwrap();
    assert_eq!(g, TimeGranularity::Hours);
}
