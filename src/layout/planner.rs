use serde::{Deserialize, Serialize};

use crate::calendar::granularity::TimeGranularity;
use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{LifeGridError, LifeGridResult};
use crate::foundation::math::ceil_units;

/// Horizontal space reserved beyond the margins (scrollbar and border).
const CHROME_WIDTH: f64 = 20.0;

/// Layout constants of one granularity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridBand {
    /// Cells per row before any fitting.
    pub units_per_row: u32,
    /// Smallest cell edge; the grid overflows rather than go below it.
    pub min_cell_size: f64,
    /// Largest cell edge.
    pub max_cell_size: f64,
    /// Gap between cells as a fraction of the cell edge.
    pub padding_fraction: f64,
    /// Space left of the grid.
    pub left_margin: f64,
    /// Space right of the grid.
    pub right_margin: f64,
    /// Space above the grid, used when fitting rows.
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
    /// Space kept free below the grid, used when fitting rows.
    #[serde(default = "default_bottom_buffer")]
    pub bottom_buffer: f64,
}

fn default_top_margin() -> f64 {
    55.0
}

fn default_bottom_buffer() -> f64 {
    80.0
}

impl GridBand {
    const fn new(
        units_per_row: u32,
        min_cell_size: f64,
        max_cell_size: f64,
        padding_fraction: f64,
        left_margin: f64,
        right_margin: f64,
        bottom_buffer: f64,
    ) -> Self {
        Self {
            units_per_row,
            min_cell_size,
            max_cell_size,
            padding_fraction,
            left_margin,
            right_margin,
            top_margin: 55.0,
            bottom_buffer,
        }
    }

    /// Default band of `granularity`.
    pub fn default_for(granularity: TimeGranularity) -> Self {
        match granularity {
            TimeGranularity::Years => Self::new(10, 45.0, 65.0, 0.1, 25.0, 25.0, 80.0),
            TimeGranularity::Months => Self::new(24, 34.0, 55.0, 0.1, 25.0, 25.0, 80.0),
            TimeGranularity::Weeks => Self::new(52, 12.0, 20.0, 0.2, 15.0, 10.0, 120.0),
            TimeGranularity::Days => Self::new(100, 6.0, 12.0, 0.15, 15.0, 10.0, 80.0),
            TimeGranularity::Hours => Self::new(24, 8.0, 16.0, 0.15, 15.0, 10.0, 80.0),
        }
    }

    fn validate(&self, granularity: TimeGranularity) -> LifeGridResult<()> {
        let finite = [
            self.min_cell_size,
            self.max_cell_size,
            self.padding_fraction,
            self.left_margin,
            self.right_margin,
            self.top_margin,
            self.bottom_buffer,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(LifeGridError::config(format!(
                "{granularity} band has a non-finite value"
            )));
        }
        if self.units_per_row == 0 {
            return Err(LifeGridError::config(format!(
                "{granularity} band units_per_row must be >= 1"
            )));
        }
        if self.min_cell_size <= 0.0 || self.max_cell_size < self.min_cell_size {
            return Err(LifeGridError::config(format!(
                "{granularity} band needs 0 < min_cell_size <= max_cell_size"
            )));
        }
        if self.padding_fraction < 0.0 {
            return Err(LifeGridError::config(format!(
                "{granularity} band padding_fraction must be >= 0"
            )));
        }
        Ok(())
    }
}

/// Band per granularity. Missing entries fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutTable {
    /// Hours band.
    #[serde(default = "band::hours")]
    pub hours: GridBand,
    /// Days band.
    #[serde(default = "band::days")]
    pub days: GridBand,
    /// Weeks band.
    #[serde(default = "band::weeks")]
    pub weeks: GridBand,
    /// Months band.
    #[serde(default = "band::months")]
    pub months: GridBand,
    /// Years band.
    #[serde(default = "band::years")]
    pub years: GridBand,
}

mod band {
    use super::GridBand;
    use crate::calendar::granularity::TimeGranularity;

    pub(super) fn hours() -> GridBand {
        GridBand::default_for(TimeGranularity::Hours)
    }
    pub(super) fn days() -> GridBand {
        GridBand::default_for(TimeGranularity::Days)
    }
    pub(super) fn weeks() -> GridBand {
        GridBand::default_for(TimeGranularity::Weeks)
    }
    pub(super) fn months() -> GridBand {
        GridBand::default_for(TimeGranularity::Months)
    }
    pub(super) fn years() -> GridBand {
        GridBand::default_for(TimeGranularity::Years)
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            hours: band::hours(),
            days: band::days(),
            weeks: band::weeks(),
            months: band::months(),
            years: band::years(),
        }
    }
}

impl LayoutTable {
    /// Band used for `granularity`.
    pub fn band(&self, granularity: TimeGranularity) -> &GridBand {
        match granularity {
            TimeGranularity::Hours => &self.hours,
            TimeGranularity::Days => &self.days,
            TimeGranularity::Weeks => &self.weeks,
            TimeGranularity::Months => &self.months,
            TimeGranularity::Years => &self.years,
        }
    }

    /// Check every band.
    pub fn validate(&self) -> LifeGridResult<()> {
        for g in TimeGranularity::ALL {
            self.band(g).validate(g)?;
        }
        Ok(())
    }
}

/// Space the grid is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Available width.
    pub width: f64,
    /// Available height; rows are only fitted when present.
    #[serde(default)]
    pub height: Option<f64>,
}

impl Viewport {
    /// Width-only viewport.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Viewport constrained on both axes.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }
}

/// Resolved grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Granularity the plan was made for.
    pub granularity: TimeGranularity,
    /// Lifespan in units, possibly fractional.
    pub total_units: f64,
    /// Cells drawn: `total_units` rounded up.
    pub total_cells: usize,
    /// Cells per row, at least 1.
    pub units_per_row: usize,
    /// Rows needed for every cell.
    pub rows: usize,
    /// Cell edge length, always > 0.
    pub cell_size: f64,
    /// Gap between neighbouring cells.
    pub cell_padding: f64,
    /// Left margin of the band.
    pub left_margin: f64,
    /// Right margin of the band.
    pub right_margin: f64,
    /// Top margin of the band.
    pub top_margin: f64,
}

impl LayoutPlan {
    /// Distance between the origins of neighbouring cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.cell_padding
    }

    /// `(row, column)` of a cell.
    pub fn position(&self, cell_index: usize) -> (usize, usize) {
        (
            cell_index / self.units_per_row,
            cell_index % self.units_per_row,
        )
    }

    /// Top-left corner of a cell, relative to the grid origin.
    pub fn cell_origin(&self, cell_index: usize) -> Point {
        let (row, col) = self.position(cell_index);
        Point::new(col as f64 * self.pitch(), row as f64 * self.pitch())
    }

    /// Rectangle of a cell, relative to the grid origin.
    pub fn cell_rect(&self, cell_index: usize) -> Rect {
        Rect::from_origin_size(
            self.cell_origin(cell_index),
            Size::new(self.cell_size, self.cell_size),
        )
    }

    /// Size of the whole grid including the trailing gaps.
    pub fn grid_size(&self) -> Size {
        Size::new(
            self.units_per_row as f64 * self.pitch(),
            self.rows as f64 * self.pitch(),
        )
    }

    /// Left offset that centers the grid in `viewport_width`, never negative.
    pub fn centering_offset(&self, viewport_width: f64) -> f64 {
        let offset = (viewport_width - self.grid_size().width) / 2.0;
        if offset.is_finite() { offset.max(0.0) } else { 0.0 }
    }

    /// Whether the grid plus its margins is wider than `viewport_width`.
    pub fn overflows(&self, viewport_width: f64) -> bool {
        self.grid_size().width + self.left_margin + self.right_margin > viewport_width
    }
}

/// Chooses cell sizes from a [`LayoutTable`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPlanner {
    table: LayoutTable,
}

impl LayoutPlanner {
    /// Planner over a custom table.
    pub fn new(table: LayoutTable) -> Self {
        Self { table }
    }

    /// Table in use.
    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    /// Plan `total_units` cells for a viewport of the given width.
    pub fn plan(
        &self,
        total_units: f64,
        granularity: TimeGranularity,
        viewport_width: f64,
    ) -> LayoutPlan {
        self.plan_viewport(total_units, granularity, Viewport::new(viewport_width))
    }

    /// Plan `total_units` cells, fitting the rows into the viewport height too when one is given.
    #[tracing::instrument(skip(self))]
    pub fn plan_viewport(
        &self,
        total_units: f64,
        granularity: TimeGranularity,
        viewport: Viewport,
    ) -> LayoutPlan {
        let band = self.table.band(granularity);
        let units_per_row = (band.units_per_row as usize).max(1);
        let total_cells = ceil_units(total_units);
        let rows = total_cells.div_ceil(units_per_row);
        let stride = 1.0 + band.padding_fraction;

        let available_width = viewport.width - band.left_margin - band.right_margin - CHROME_WIDTH;
        let mut fit = available_width / (units_per_row as f64 * stride);
        if let Some(height) = viewport.height.filter(|_| rows > 0) {
            let available_height = height - band.top_margin - band.bottom_buffer;
            fit = fit.min(available_height / (rows as f64 * stride));
        }

        let cell_size = if fit.is_finite() && fit > 0.0 {
            fit.clamp(band.min_cell_size, band.max_cell_size)
        } else {
            tracing::debug!(?viewport, "degenerate viewport, using the minimum cell size");
            band.min_cell_size
        };

        LayoutPlan {
            granularity,
            total_units,
            total_cells,
            units_per_row,
            rows,
            cell_size,
            cell_padding: cell_size * band.padding_fraction,
            left_margin: band.left_margin,
            right_margin: band.right_margin,
            top_margin: band.top_margin,
        }
    }
}

/// Plan with the default layout table.
pub fn plan(total_units: f64, granularity: TimeGranularity, viewport_width: f64) -> LayoutPlan {
    LayoutPlanner::default().plan(total_units, granularity, viewport_width)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
