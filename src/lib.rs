//! LifeGrid turns a lifespan into a grid of time units and paints how recurring activities
//! consume the lived and the remaining part of it.
//!
//! # Pipeline overview
//!
//! 1. **Count**: `LifeParameters -> UnitCounts` (lived / remaining / total units at a granularity)
//! 2. **Plan**: `UnitCounts + Viewport -> LayoutPlan` (units per row, rows, cell size, padding)
//! 3. **Allocate**: `Activity list -> CellColorDescriptor` per cell (solid or hard-edged gradient)
//! 4. **Assemble**: all of the above plus progress figures and anchored annotations in one
//!    serializable [`GridSnapshot`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: "now" is an input; identical inputs always produce identical snapshots.
//! - **Clamp, don't fail**: the numeric engine never errors. Only the input boundaries
//!   (constructors, JSON documents, list edits) return [`LifeGridError`].
//! - **No rendering**: paint surfaces consume the snapshot; shapes and gradient stops are
//!   provided as `kurbo` paths and plain data.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod activity;
mod allocate;
mod calendar;
mod config;
mod foundation;
mod grid;
mod layout;

pub use activity::input::{
    ACTIVITY_PALETTE, clamp_rate_hours, palette_color, parse_rate_hours, sanitize_lifespan,
    sanitize_rate_hours,
};
pub use activity::model::{Activity, ActivityId, ActivityList, RatePeriod};
pub use activity::normalize::{day_fraction, hours_per_day};
pub use allocate::descriptor::{CellColorDescriptor, GradientStop, Segment, Segments};
pub use allocate::walk::{AllocationInput, Side, SideSpan, color_for_cell};
pub use calendar::counts::{
    LifeParameters, MAX_LIFESPAN_YEARS, UnitCounts, completed_years, elapsed_days, unit_counts,
};
pub use calendar::granularity::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, HOURS_PER_DAY, TimeGranularity, WEEKS_PER_YEAR,
};
pub use calendar::progress::{
    ActivityUsage, ProgressStats, activity_usage, future_commitment, progress_stats,
};
pub use config::document::LifeGridConfig;
pub use foundation::core::{Baseline, BezPath, Point, Rect, Rgb8, Size};
pub use foundation::error::{LifeGridError, LifeGridResult};
pub use grid::annotate::{
    AnchoredAnnotation, Annotation, AnnotationTarget, Placement, anchor_annotations,
    default_annotations, row_caption,
};
pub use grid::assemble::{GridCell, GridInputs, GridSnapshot, LifeGrid, assemble_grid};
pub use grid::cache::{GridCache, InputFingerprint, fingerprint_inputs};
pub use layout::planner::{GridBand, LayoutPlan, LayoutPlanner, LayoutTable, Viewport, plan};
pub use layout::shape::CellShape;
