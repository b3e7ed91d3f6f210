//! Default and user grid annotations and their anchor rectangles.
//!
//! Only anchors are resolved here; text placement belongs to the renderer.

use serde::{Deserialize, Serialize};

use crate::calendar::granularity::TimeGranularity;
use crate::foundation::core::{Rect, Rgb8};
use crate::layout::planner::LayoutPlan;

const BIRTH_COLOR: Rgb8 = Rgb8::new(0x3B, 0x82, 0xF6);
const LIFESPAN_COLOR: Rgb8 = Rgb8::new(0x8B, 0x5C, 0xF6);
const CAPTION_COLOR: Rgb8 = Rgb8::new(0x3B, 0x82, 0xF6);
const MILESTONES: [(u32, Rgb8); 3] = [
    (20, Rgb8::new(0x22, 0xC5, 0x5E)),
    (40, Rgb8::new(0xEA, 0xB3, 0x08)),
    (60, Rgb8::new(0x8B, 0x5C, 0xF6)),
];

/// Side of the anchor the renderer should put the text on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
}

/// What an annotation points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationTarget {
    /// One cell by global index.
    Cell {
        /// Cell index.
        index: usize,
    },
    /// The first row as a whole.
    Row,
}

/// A label attached to a cell or to the grid's first row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Label text; may contain line breaks.
    pub text: String,
    /// Text and arrow color.
    pub color: Rgb8,
    /// What the label points at.
    pub target: AnnotationTarget,
    /// Where the renderer should put the text.
    pub placement: Placement,
    /// Only show in this view; every view when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_view: Option<TimeGranularity>,
}

impl Annotation {
    /// Annotation pointing at one cell.
    pub fn cell(index: usize, text: impl Into<String>, placement: Placement, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            color,
            target: AnnotationTarget::Cell { index },
            placement,
            show_in_view: None,
        }
    }

    /// Caption spanning the first row.
    pub fn row(text: impl Into<String>, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            color,
            target: AnnotationTarget::Row,
            placement: Placement::Top,
            show_in_view: None,
        }
    }

    /// Restrict the annotation to one view.
    pub fn only_in(mut self, granularity: TimeGranularity) -> Self {
        self.show_in_view = Some(granularity);
        self
    }

    /// Whether the annotation shows in the `granularity` view.
    pub fn visible_in(&self, granularity: TimeGranularity) -> bool {
        self.show_in_view.is_none_or(|g| g == granularity)
    }
}

/// An annotation with its anchor resolved against a layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnchoredAnnotation {
    /// The annotation.
    #[serde(flatten)]
    pub annotation: Annotation,
    /// Anchor rectangle relative to the grid origin.
    pub anchor: Rect,
}

/// Caption describing what one row of the grid spans.
pub fn row_caption(granularity: TimeGranularity, units_per_row: usize) -> String {
    let n = units_per_row;
    let label = granularity.unit_label(n as f64);
    let spans = |per: usize, bigger: TimeGranularity| {
        if per > 0 && n % per == 0 {
            let k = n / per;
            format!(
                "Each row is {n} {label} = {k} {}",
                bigger.unit_label(k as f64)
            )
        } else {
            format!("Each row is {n} {label}")
        }
    };
    match granularity {
        TimeGranularity::Years if n == 10 => "Each row is one decade".to_owned(),
        TimeGranularity::Years => format!("Each row is {n} {label}"),
        TimeGranularity::Months => spans(12, TimeGranularity::Years),
        TimeGranularity::Weeks => spans(52, TimeGranularity::Years),
        TimeGranularity::Days => format!("Each row is {n} {label}"),
        TimeGranularity::Hours => spans(24, TimeGranularity::Days),
    }
}

/// Cells per year along a row, used to place age milestones on row starts.
fn row_units_per_year(granularity: TimeGranularity) -> Option<usize> {
    match granularity {
        TimeGranularity::Months => Some(12),
        TimeGranularity::Weeks => Some(52),
        _ => None,
    }
}

/// Annotations every grid shows: birth, end of lifespan, age milestones and a row caption.
pub fn default_annotations(plan: &LayoutPlan, lifespan_years: u32) -> Vec<Annotation> {
    let mut out = vec![Annotation::row(
        row_caption(plan.granularity, plan.units_per_row),
        CAPTION_COLOR,
    )];
    let Some(last) = plan.total_cells.checked_sub(1) else {
        return out;
    };

    out.push(Annotation::cell(0, "Birth", Placement::Left, BIRTH_COLOR));
    out.push(Annotation::cell(
        last,
        format!("Turning\n{lifespan_years}"),
        Placement::Right,
        LIFESPAN_COLOR,
    ));
    if let Some(per_year) = row_units_per_year(plan.granularity) {
        for (age, color) in MILESTONES {
            out.push(Annotation::cell(
                age as usize * per_year,
                format!("Turning\n{age}"),
                Placement::Left,
                color,
            ));
        }
    }
    out
}

/// Resolve anchors, dropping cell annotations that point past the last cell.
pub fn anchor_annotations(annotations: &[Annotation], plan: &LayoutPlan) -> Vec<AnchoredAnnotation> {
    annotations
        .iter()
        .filter_map(|a| {
            let anchor = match a.target {
                AnnotationTarget::Cell { index } if index < plan.total_cells => {
                    plan.cell_rect(index)
                }
                AnnotationTarget::Cell { .. } => return None,
                AnnotationTarget::Row => {
                    let cols = plan.units_per_row.min(plan.total_cells).max(1);
                    let width = (cols - 1) as f64 * plan.pitch() + plan.cell_size;
                    Rect::new(0.0, 0.0, width, plan.cell_size)
                }
            };
            Some(AnchoredAnnotation {
                annotation: a.clone(),
                anchor,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/grid/annotate.rs"]
mod tests;
