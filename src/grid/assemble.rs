use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::model::ActivityList;
use crate::allocate::descriptor::CellColorDescriptor;
use crate::allocate::walk::{AllocationInput, Side};
use crate::calendar::counts::{LifeParameters, UnitCounts, unit_counts};
use crate::calendar::progress::{ActivityUsage, ProgressStats, activity_usage, progress_stats};
use crate::config::document::{LifeGridConfig, open_json, read_json};
use crate::foundation::error::{LifeGridError, LifeGridResult};
use crate::grid::annotate::{
    AnchoredAnnotation, Annotation, anchor_annotations, default_annotations,
};
use crate::layout::planner::{LayoutPlan, LayoutPlanner, Viewport};

/// Everything a grid is computed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridInputs {
    /// Birth date, lifespan, granularity and "now".
    pub params: LifeParameters,
    /// Ordered activities; the default trio when omitted.
    #[serde(default = "ActivityList::defaults")]
    pub activities: ActivityList,
    /// Layout space.
    pub viewport: Viewport,
    /// User annotations, shown after the defaults in the views they allow.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl GridInputs {
    /// Inputs with the default activities.
    pub fn new(params: LifeParameters, viewport: Viewport) -> Self {
        Self {
            params,
            activities: ActivityList::defaults(),
            viewport,
            annotations: Vec::new(),
        }
    }

    /// Replace the activity list.
    pub fn with_activities(mut self, activities: ActivityList) -> Self {
        self.activities = activities;
        self
    }

    /// Append a user annotation.
    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Remove the user annotation at `index`; returns it when present.
    pub fn remove_annotation(&mut self, index: usize) -> Option<Annotation> {
        (index < self.annotations.len()).then(|| self.annotations.remove(index))
    }

    /// Parse and validate inputs from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> LifeGridResult<Self> {
        let inputs: Self = read_json(r, "grid inputs")?;
        inputs.validate()?;
        Ok(inputs)
    }

    /// Parse and validate inputs from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LifeGridResult<Self> {
        Self::from_reader(open_json(path.as_ref(), "grid inputs")?)
    }

    /// Parse and validate inputs from a JSON string.
    pub fn from_json_str(s: &str) -> LifeGridResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check the lifespan bounds and the viewport.
    pub fn validate(&self) -> LifeGridResult<()> {
        self.params.validate()?;
        if !self.viewport.width.is_finite() {
            return Err(LifeGridError::validation("viewport width must be finite"));
        }
        if self.viewport.height.is_some_and(|h| !h.is_finite()) {
            return Err(LifeGridError::validation("viewport height must be finite"));
        }
        Ok(())
    }
}

/// One painted cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridCell {
    /// Global cell index, row-major.
    pub index: usize,
    /// Side of "now" the cell lies on.
    pub side: Side,
    /// Paint instruction.
    pub color: CellColorDescriptor,
}

/// Fully resolved grid: counts, layout, every cell and the anchored annotations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridSnapshot {
    /// Raw lived / remaining / total counts.
    pub counts: UnitCounts,
    /// Progress figures with future commitments subtracted.
    pub progress: ProgressStats,
    /// Per-activity usage, in list order.
    pub usage: Vec<ActivityUsage>,
    /// Layout geometry.
    pub plan: LayoutPlan,
    /// One entry per cell in `[0, plan.total_cells)`.
    pub cells: Vec<GridCell>,
    /// Labels with resolved anchors.
    pub annotations: Vec<AnchoredAnnotation>,
}

impl GridSnapshot {
    /// Number of cells on `side`.
    pub fn cells_on(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.side == side).count()
    }
}

/// Grid assembler bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct LifeGrid {
    config: LifeGridConfig,
    planner: LayoutPlanner,
}

impl LifeGrid {
    /// Assembler over a validated configuration.
    pub fn new(config: LifeGridConfig) -> LifeGridResult<Self> {
        config.validate()?;
        Ok(Self {
            planner: LayoutPlanner::new(config.layout),
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &LifeGridConfig {
        &self.config
    }

    /// Validate `inputs` and assemble their grid.
    #[tracing::instrument(skip(self, inputs), fields(granularity = %inputs.params.granularity))]
    pub fn assemble(&self, inputs: &GridInputs) -> LifeGridResult<GridSnapshot> {
        inputs.validate()?;
        Ok(self.build(
            &inputs.params,
            &inputs.activities,
            &inputs.annotations,
            inputs.viewport,
        ))
    }

    pub(crate) fn build(
        &self,
        params: &LifeParameters,
        activities: &ActivityList,
        user_annotations: &[Annotation],
        viewport: Viewport,
    ) -> GridSnapshot {
        let counts = unit_counts(params);
        let plan = self
            .planner
            .plan_viewport(counts.total, params.granularity, viewport);

        let alloc = AllocationInput::new(counts.lived, counts.remaining, 1.0)
            .with_baseline(self.config.baseline);
        let list = activities.as_slice();
        let past = alloc
            .paint_side_within(Side::Past, list, plan.total_cells)
            .into_iter()
            .map(|color| (Side::Past, color));
        let future = alloc
            .paint_side_within(Side::Future, list, plan.total_cells)
            .into_iter()
            .map(|color| (Side::Future, color));
        let unlived = CellColorDescriptor::solid(self.config.baseline.unlived);
        let cells: Vec<GridCell> = past
            .chain(future)
            .chain(std::iter::repeat_with(|| (Side::Future, unlived.clone())))
            .take(plan.total_cells)
            .enumerate()
            .map(|(index, (side, color))| GridCell { index, side, color })
            .collect();

        let mut shown = default_annotations(&plan, params.lifespan_years);
        shown.extend(
            user_annotations
                .iter()
                .filter(|a| a.visible_in(params.granularity))
                .cloned(),
        );
        let annotations = anchor_annotations(&shown, &plan);

        tracing::debug!(
            cells = cells.len(),
            rows = plan.rows,
            cell_size = plan.cell_size,
            "grid assembled"
        );
        GridSnapshot {
            progress: progress_stats(&counts, list),
            usage: activity_usage(&counts, list),
            counts,
            plan,
            cells,
            annotations,
        }
    }
}

/// Assemble a grid with the default configuration.
///
/// Inputs are not validated; an out-of-range lifespan simply yields the grid it describes.
pub fn assemble_grid(
    params: &LifeParameters,
    activities: &ActivityList,
    viewport_width: f64,
) -> GridSnapshot {
    LifeGrid::default().build(params, activities, &[], Viewport::new(viewport_width))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/assemble.rs"]
mod tests;
