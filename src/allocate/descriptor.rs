use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::core::Rgb8;
use crate::foundation::math::UNIT_EPSILON;

/// Part of one cell's fill attributed to a single activity, in percent of the cell width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Inclusive start, `0..100`.
    pub start_percent: f64,
    /// Exclusive end, `start_percent..=100`.
    pub end_percent: f64,
    /// Activity color.
    pub color: Rgb8,
}

impl Segment {
    /// Width of the segment in percent.
    pub fn width_percent(&self) -> f64 {
        self.end_percent - self.start_percent
    }

    /// `true` when the segment covers the whole cell.
    pub fn covers_cell(&self) -> bool {
        self.start_percent <= UNIT_EPSILON * 100.0 && self.end_percent >= 100.0 - UNIT_EPSILON * 100.0
    }
}

/// Segments painted into one cell; most cells hold at most two.
pub type Segments = SmallVec<[Segment; 2]>;

/// Resolved paint instruction for one cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellColorDescriptor {
    /// The whole cell is one color.
    Solid {
        /// Fill color.
        color: Rgb8,
    },
    /// Left-to-right hard-edged gradient.
    ///
    /// Segments are kept in encounter order; anything they do not cover shows `default_color`.
    Gradient {
        /// Color of the uncovered parts (the side baseline).
        default_color: Rgb8,
        /// Painted sub-ranges of the cell.
        segments: Segments,
    },
}

/// One color stop of a linear gradient, offset in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Offset along the cell, `0..=100`.
    pub offset_percent: f64,
    /// Color at this offset.
    pub color: Rgb8,
}

impl CellColorDescriptor {
    /// Solid descriptor.
    pub fn solid(color: Rgb8) -> Self {
        Self::Solid { color }
    }

    /// Collapse the segments painted into one cell into a descriptor.
    ///
    /// No segment gives the default color and a single full-width segment gives that
    /// segment's color. Anything else becomes a gradient.
    pub fn from_segments(default_color: Rgb8, segments: Segments) -> Self {
        match segments.as_slice() {
            [] => Self::solid(default_color),
            [only] if only.covers_cell() => Self::solid(only.color),
            _ => Self::Gradient {
                default_color,
                segments,
            },
        }
    }

    /// `true` for solid descriptors.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid { .. })
    }

    /// The solid color, if any.
    pub fn solid_color(&self) -> Option<Rgb8> {
        match self {
            Self::Solid { color } => Some(*color),
            Self::Gradient { .. } => None,
        }
    }

    /// Painted segments; empty for solid cells.
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Solid { .. } => &[],
            Self::Gradient { segments, .. } => segments,
        }
    }

    /// Expand into hard-edged linear gradient stops.
    ///
    /// Every segment contributes four stops (default, color, color, default) so adjacent stops
    /// at the same offset produce crisp edges.
    pub fn linear_stops(&self) -> Vec<GradientStop> {
        let stop = |offset_percent: f64, color: Rgb8| GradientStop {
            offset_percent,
            color,
        };
        match self {
            Self::Solid { color } => vec![stop(0.0, *color), stop(100.0, *color)],
            Self::Gradient {
                default_color,
                segments,
            } => {
                let mut stops = Vec::with_capacity(segments.len() * 4 + 2);
                stops.push(stop(0.0, *default_color));
                for s in segments {
                    stops.push(stop(s.start_percent, *default_color));
                    stops.push(stop(s.start_percent, s.color));
                    stops.push(stop(s.end_percent, s.color));
                    stops.push(stop(s.end_percent, *default_color));
                }
                stops.push(stop(100.0, *default_color));
                stops
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/allocate/descriptor.rs"]
mod tests;
