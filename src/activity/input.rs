//! Sanitizers for raw values arriving from input controls.
//!
//! These run at the boundary so the engine only ever sees in-domain values.

use crate::calendar::counts::MAX_LIFESPAN_YEARS;
use crate::foundation::core::Rgb8;
use crate::foundation::math::clamp_finite;

/// Colors handed out to newly added activities, in order.
pub const ACTIVITY_PALETTE: [Rgb8; 10] = [
    Rgb8::new(0xEF, 0x44, 0x44),
    Rgb8::new(0xF5, 0x9E, 0x0B),
    Rgb8::new(0x10, 0xB9, 0x81),
    Rgb8::new(0x63, 0x66, 0xF1),
    Rgb8::new(0xEC, 0x48, 0x99),
    Rgb8::new(0x8B, 0x5C, 0xF6),
    Rgb8::new(0x14, 0xB8, 0xA6),
    Rgb8::new(0xF9, 0x73, 0x16),
    Rgb8::new(0x06, 0xB6, 0xD4),
    Rgb8::new(0x84, 0xCC, 0x16),
];

/// Palette entry for the `index`-th activity, wrapping around.
pub fn palette_color(index: usize) -> Rgb8 {
    ACTIVITY_PALETTE[index % ACTIVITY_PALETTE.len()]
}

/// Clamp a declared rate to `[0, 24]`; NaN becomes `0`.
pub fn clamp_rate_hours(hours: f64) -> f64 {
    clamp_finite(hours, 0.0, 24.0)
}

/// Snap a declared rate to the nearest half hour, then clamp it to `[0, 24]`.
pub fn sanitize_rate_hours(hours: f64) -> f64 {
    clamp_rate_hours((hours * 2.0).round() / 2.0)
}

/// Parse a rate typed by the user; unparsable text counts as zero hours.
pub fn parse_rate_hours(raw: &str) -> f64 {
    sanitize_rate_hours(raw.trim().parse::<f64>().unwrap_or(0.0))
}

/// Parse a lifespan typed by the user.
///
/// Empty or non-numeric input becomes `1`; values are clamped to `1..=MAX_LIFESPAN_YEARS`.
pub fn sanitize_lifespan(raw: &str) -> u32 {
    let Ok(v) = raw.trim().parse::<i64>() else {
        return 1;
    };
    u32::try_from(v.clamp(1, i64::from(MAX_LIFESPAN_YEARS))).unwrap_or(1)
}

#[cfg(test)]
#[path = "../../tests/unit/activity/input.rs"]
mod tests;
