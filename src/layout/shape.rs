use std::fmt;
use std::str::FromStr;

use kurbo::{Affine, Circle, Shape};
use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::LifeGridError;

/// Half extent of every outline at scale 1.
const RADIUS: f64 = 10.0;
const PATH_TOLERANCE: f64 = 0.01;

/// Outline a renderer draws each cell with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellShape {
    /// Axis-aligned square.
    #[default]
    Square,
    /// Circle.
    Circle,
    /// Heart.
    Heart,
    /// Square rotated by 45 degrees.
    Diamond,
    /// Pointy-top hexagon.
    Hexagon,
}

impl CellShape {
    /// Every shape in cycle order.
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Circle,
        Self::Heart,
        Self::Diamond,
        Self::Hexagon,
    ];

    /// Next shape in the cycle, wrapping to `Square`.
    pub fn next(self) -> Self {
        match self {
            Self::Square => Self::Circle,
            Self::Circle => Self::Heart,
            Self::Heart => Self::Diamond,
            Self::Diamond => Self::Hexagon,
            Self::Hexagon => Self::Square,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Heart => "heart",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
        }
    }

    /// Outline centered on the origin, fitting a `20 * scale` box.
    pub fn path(self, scale: f64) -> BezPath {
        let r = RADIUS * scale;
        let mut p = BezPath::new();
        match self {
            Self::Square => {
                let h = 0.8 * r;
                p.move_to((-h, -h));
                p.line_to((h, -h));
                p.line_to((h, h));
                p.line_to((-h, h));
                p.close_path();
            }
            Self::Circle => {
                p = Circle::new((0.0, 0.0), r).to_path(PATH_TOLERANCE);
            }
            Self::Heart => {
                // two lobes meeting at the top notch, tip at the bottom
                let s = r / 7.0;
                p.move_to((0.0, -3.5 * s));
                p.curve_to((0.0, -5.5 * s), (-2.0 * s, -7.0 * s), (-4.0 * s, -7.0 * s));
                p.curve_to((-6.5 * s, -7.0 * s), (-7.0 * s, -4.5 * s), (-7.0 * s, -3.0 * s));
                p.curve_to((-7.0 * s, 1.0 * s), (-3.0 * s, 4.0 * s), (0.0, 7.0 * s));
                p.curve_to((3.0 * s, 4.0 * s), (7.0 * s, 1.0 * s), (7.0 * s, -3.0 * s));
                p.curve_to((7.0 * s, -4.5 * s), (6.5 * s, -7.0 * s), (4.0 * s, -7.0 * s));
                p.curve_to((2.0 * s, -7.0 * s), (0.0, -5.5 * s), (0.0, -3.5 * s));
                p.close_path();
            }
            Self::Diamond => {
                p.move_to((0.0, -r));
                p.line_to((r, 0.0));
                p.line_to((0.0, r));
                p.line_to((-r, 0.0));
                p.close_path();
            }
            Self::Hexagon => {
                let w = r * 3f64.sqrt() / 2.0;
                p.move_to((w, r / 2.0));
                p.line_to((0.0, r));
                p.line_to((-w, r / 2.0));
                p.line_to((-w, -r / 2.0));
                p.line_to((0.0, -r));
                p.line_to((w, -r / 2.0));
                p.close_path();
            }
        }
        p
    }

    /// Outline placed inside a layout cell.
    pub fn path_in(self, cell: Rect) -> BezPath {
        let scale = cell.width().min(cell.height()) / (2.0 * RADIUS);
        let center = cell.center();
        Affine::translate((center.x, center.y)) * self.path(scale)
    }
}

impl fmt::Display for CellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellShape {
    type Err = LifeGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LifeGridError::validation(format!("unknown cell shape \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/shape.rs"]
mod tests;
