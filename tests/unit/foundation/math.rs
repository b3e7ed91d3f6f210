use super::*;

#[test]
fn percent_of_zero_total_is_zero() {
    assert_eq!(percent_of(10.0, 0.0), 0.0);
    assert_eq!(percent_of(0.0, 0.0), 0.0);
    assert!((percent_of(25.0, 80.0) - 31.25).abs() < 1e-12);
}

#[test]
fn ceil_units_ignores_float_noise() {
    assert_eq!(ceil_units(80.0), 80);
    assert_eq!(ceil_units(80.000_000_000_1), 80);
    assert_eq!(ceil_units(80.2), 81);
    assert_eq!(ceil_units(0.0), 0);
    assert_eq!(ceil_units(-3.0), 0);
    assert_eq!(ceil_units(f64::NAN), 0);
}

#[test]
fn clamp_finite_maps_nan_to_low_bound() {
    assert_eq!(clamp_finite(f64::NAN, 0.0, 24.0), 0.0);
    assert_eq!(clamp_finite(30.0, 0.0, 24.0), 24.0);
    assert_eq!(clamp_finite(-1.0, 0.0, 24.0), 0.0);
    assert_eq!(clamp_finite(f64::INFINITY, 0.0, 24.0), 24.0);
}
