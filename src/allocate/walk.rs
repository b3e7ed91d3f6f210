use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::activity::model::Activity;
use crate::activity::normalize::hours_per_day;
use crate::allocate::descriptor::{CellColorDescriptor, Segment, Segments};
use crate::foundation::core::{Baseline, Rgb8};
use crate::foundation::math::{UNIT_EPSILON, ceil_units, clamp_finite};

/// Which side of "now" a cell lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Already lived.
    Past,
    /// Not yet lived.
    Future,
}

impl Side {
    /// Baseline color of this side.
    pub fn baseline(self, baseline: &Baseline) -> Rgb8 {
        match self {
            Self::Past => baseline.lived,
            Self::Future => baseline.unlived,
        }
    }
}

/// Cell range and time budget of one side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideSpan {
    /// Which side this span describes.
    pub side: Side,
    /// Global index of the side's first cell.
    pub first_cell: usize,
    /// Number of cells on the side.
    pub cell_count: usize,
    /// Time on the side, measured in cells.
    pub total_units: f64,
}

impl SideSpan {
    /// Length of the continuous line activities are laid on.
    ///
    /// The side's time never spills past its last cell.
    pub fn line_length(&self) -> f64 {
        self.total_units.min(self.cell_count as f64)
    }

    /// Units an activity consuming `hours_per_day` occupies on this side.
    pub fn occupancy(&self, hours_per_day: f64) -> f64 {
        self.total_units * hours_per_day / 24.0
    }

    /// Whether the global cell index lies on this side.
    pub fn contains(&self, cell_index: usize) -> bool {
        cell_index >= self.first_cell && cell_index - self.first_cell < self.cell_count
    }
}

/// Everything the allocator needs besides the activity list.
///
/// Counts are expressed in units of the active granularity; `time_unit_multiplier` converts them
/// to cells (1.0 when one cell is one unit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AllocationInput {
    /// Lived units.
    pub lived_units: f64,
    /// Remaining units.
    pub remaining_units: f64,
    /// Cells per unit.
    pub time_unit_multiplier: f64,
    /// Color of unpainted cells.
    pub baseline: Baseline,
}

impl AllocationInput {
    /// New input with the default baseline. Negative or NaN values are treated as zero.
    pub fn new(lived_units: f64, remaining_units: f64, time_unit_multiplier: f64) -> Self {
        Self {
            lived_units: clamp_finite(lived_units, 0.0, f64::MAX),
            remaining_units: clamp_finite(remaining_units, 0.0, f64::MAX),
            time_unit_multiplier: clamp_finite(time_unit_multiplier, 0.0, f64::MAX),
            baseline: Baseline::default(),
        }
    }

    /// Replace the baseline colors.
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Cell range and budget of `side`.
    pub fn span(&self, side: Side) -> SideSpan {
        let m = self.time_unit_multiplier;
        let past_cells = ceil_units(self.lived_units * m);
        match side {
            Side::Past => SideSpan {
                side,
                first_cell: 0,
                cell_count: past_cells,
                total_units: self.lived_units * m,
            },
            Side::Future => {
                let end = ceil_units((self.lived_units + self.remaining_units) * m);
                SideSpan {
                    side,
                    first_cell: past_cells,
                    cell_count: end.saturating_sub(past_cells),
                    total_units: self.remaining_units * m,
                }
            }
        }
    }

    /// The side a global cell index belongs to. Cells past the end count as future.
    pub fn side_of(&self, cell_index: usize) -> Side {
        if self.span(Side::Past).contains(cell_index) {
            Side::Past
        } else {
            Side::Future
        }
    }

    /// Descriptor of one cell.
    ///
    /// Querying a cell with the wrong side yields the baseline of the side it really belongs to.
    pub fn color_for_cell(
        &self,
        cell_index: usize,
        side: Side,
        activities: &[Activity],
    ) -> CellColorDescriptor {
        let true_side = self.side_of(cell_index);
        let span = self.span(true_side);
        if true_side != side || !span.contains(cell_index) {
            return CellColorDescriptor::solid(true_side.baseline(&self.baseline));
        }

        let target = cell_index - span.first_cell;
        let mut segments = Segments::new();
        walk_side(&span, activities, |cell, segment| {
            if cell > target {
                return ControlFlow::Break(());
            }
            if cell == target {
                segments.push(segment);
            }
            ControlFlow::Continue(())
        });
        CellColorDescriptor::from_segments(side.baseline(&self.baseline), segments)
    }

    /// Descriptors of every cell on `side`, in cell order, in one pass over the side.
    pub fn paint_side(&self, side: Side, activities: &[Activity]) -> Vec<CellColorDescriptor> {
        self.paint_side_within(side, activities, usize::MAX)
    }

    /// Descriptors of the cells on `side` whose global index is below `cell_limit`.
    ///
    /// Occupancy is still measured against the whole side; the walk stops at the first cell
    /// past the limit.
    pub fn paint_side_within(
        &self,
        side: Side,
        activities: &[Activity],
        cell_limit: usize,
    ) -> Vec<CellColorDescriptor> {
        let span = self.span(side);
        let visible = span
            .cell_count
            .min(cell_limit.saturating_sub(span.first_cell));
        let mut cells: Vec<Segments> = vec![SmallVec::new(); visible];
        walk_side(&span, activities, |cell, segment| match cells.get_mut(cell) {
            Some(slot) => {
                slot.push(segment);
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        });
        let default_color = side.baseline(&self.baseline);
        cells
            .into_iter()
            .map(|segments| CellColorDescriptor::from_segments(default_color, segments))
            .collect()
    }
}

/// Descriptor of one cell with the default baseline colors.
///
/// `lived_units` and `remaining_units` are the side totals in units of the active granularity;
/// `time_unit_multiplier` is the number of cells per unit.
pub fn color_for_cell(
    cell_index: usize,
    side: Side,
    lived_units: f64,
    remaining_units: f64,
    activities: &[Activity],
    time_unit_multiplier: f64,
) -> CellColorDescriptor {
    AllocationInput::new(lived_units, remaining_units, time_unit_multiplier).color_for_cell(
        cell_index,
        side,
        activities,
    )
}

/// Lay the side's applicable activities end to end on its line, cell by cell.
///
/// `visit` receives the side-local cell index and the segment painted into it, in walk order.
/// Occupancy beyond the end of the line is dropped.
pub(crate) fn walk_side<F>(span: &SideSpan, activities: &[Activity], mut visit: F)
where
    F: FnMut(usize, Segment) -> ControlFlow<()>,
{
    let line = span.line_length();
    let mut cell = 0usize;
    let mut fill = 0.0f64;

    for activity in activities.iter().filter(|a| a.applies_to(span.side)) {
        let mut left = span.occupancy(hours_per_day(activity));
        while left > UNIT_EPSILON {
            let position = cell as f64 + fill;
            let room = (1.0 - fill).min(line - position);
            if room <= UNIT_EPSILON {
                tracing::debug!(
                    side = ?span.side,
                    activity = %activity.name,
                    discarded_units = left,
                    "activities overflow the side, discarding the remainder"
                );
                return;
            }
            let take = left.min(room);
            let segment = Segment {
                start_percent: fill * 100.0,
                end_percent: (fill + take) * 100.0,
                color: activity.color,
            };
            if visit(cell, segment).is_break() {
                return;
            }
            fill += take;
            left -= take;
            if fill >= 1.0 - UNIT_EPSILON {
                cell += 1;
                fill = 0.0;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/allocate/walk.rs"]
mod tests;
