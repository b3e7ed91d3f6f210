/// Tolerance used when comparing fill fractions and unit counts.
pub(crate) const UNIT_EPSILON: f64 = 1e-9;

/// `num / den * 100`, or `0.0` when the denominator is zero or the result is not finite.
pub(crate) fn percent_of(num: f64, den: f64) -> f64 {
    if den.abs() <= UNIT_EPSILON {
        return 0.0;
    }
    let v = num / den * 100.0;
    if v.is_finite() { v } else { 0.0 }
}

/// Whole cells needed to show `units`, ignoring float noise just above an integer.
pub(crate) fn ceil_units(units: f64) -> usize {
    if !units.is_finite() || units <= UNIT_EPSILON {
        return 0;
    }
    (units - UNIT_EPSILON).ceil().max(0.0) as usize
}

/// Clamp to `[lo, hi]`, mapping NaN to `lo`.
pub(crate) fn clamp_finite(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
