//! Discretization planner: grid shape and step count from a target region.

use std::ops::Range;

use heatplan_core::Point;
use heatplan_region::Region;
use tracing::debug;

use crate::config::PlanConfig;
use crate::error::PlanError;

/// Largest per-axis extent (and iteration count) the planner accepts.
const MAX_EXTENT: f64 = u32::MAX as f64;

/// Largest cell count a single `f64` buffer can hold.
///
/// A `Vec<f64>` may span at most `isize::MAX` bytes.
pub const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Grid dimensions and step parameters for one run.
///
/// Produced by [`GridPlan::new`] / [`set_up`]. Rows index the x axis and
/// columns the y axis; cell `(i, j)` lives at flat offset `i * cols + j`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlan {
    /// Rows including the halo: `round(width / delta) + 1 + 2 * iterations`.
    pub rows: usize,
    /// Columns including the halo: `round(height / delta) + 1 + 2 * iterations`.
    pub cols: usize,
    /// Number of time steps, `floor(horizon / gamma)`. Also the halo width.
    pub iterations: usize,
    /// Explicit-scheme coefficient `gamma / delta^2`.
    pub lambda: f64,
    /// Time step.
    pub gamma: f64,
    /// Space step.
    pub delta: f64,
    /// `(min_x, min_y)` of the target bounding box; physical position of
    /// cell `(iterations, iterations)`.
    pub origin: (f64, f64),
}

impl GridPlan {
    /// Plan the grid for `target` under `config`.
    ///
    /// Fails before any allocation if the parameters are out of range, the
    /// target is continuous or empty, or the grid would not be addressable.
    pub fn new(target: &Region, config: &PlanConfig) -> Result<Self, PlanError> {
        config.validate()?;
        let bounds = target.bounds()?;

        let iterations = config.raw_iterations();
        if iterations > MAX_EXTENT {
            return Err(PlanError::GridOverflow {
                reason: format!("{iterations} time steps"),
            });
        }
        let iterations = iterations as usize;

        let rows = axis_extent(bounds.width(), config.delta, iterations, "rows")?;
        let cols = axis_extent(bounds.height(), config.delta, iterations, "cols")?;
        checked_cell_count(rows, cols)?;

        let plan = Self {
            rows,
            cols,
            iterations,
            lambda: config.lambda(),
            gamma: config.gamma,
            delta: config.delta,
            origin: bounds.min(),
        };
        debug!(
            rows = plan.rows,
            cols = plan.cols,
            iterations = plan.iterations,
            lambda = plan.lambda,
            "grid planned"
        );
        Ok(plan)
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat row-major offset of cell `(i, j)`.
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Physical coordinate sampled for cell `(i, j)`.
    pub fn coordinate(&self, i: usize, j: usize) -> Point {
        Point::new(
            axis_coordinate(i, self.iterations, self.delta, self.origin.0),
            axis_coordinate(j, self.iterations, self.delta, self.origin.1),
        )
    }

    /// Halo width in cells on every side.
    pub fn halo(&self) -> usize {
        self.iterations
    }

    /// Row indices covering the target bounding box.
    pub fn interior_rows(&self) -> Range<usize> {
        self.iterations..self.rows - self.iterations
    }

    /// Column indices covering the target bounding box.
    pub fn interior_cols(&self) -> Range<usize> {
        self.iterations..self.cols - self.iterations
    }

    /// Simulated time actually covered, `iterations * gamma`. May fall
    /// short of the configured horizon.
    pub fn elapsed(&self) -> f64 {
        self.iterations as f64 * self.gamma
    }
}

/// Plan a grid from raw scalars.
///
/// Equivalent to `GridPlan::new(target, &PlanConfig::new(gamma, delta, horizon))`.
pub fn set_up(
    target: &Region,
    gamma: f64,
    delta: f64,
    horizon: f64,
) -> Result<GridPlan, PlanError> {
    GridPlan::new(target, &PlanConfig::new(gamma, delta, horizon))
}

/// `x = (index - iterations) * delta + origin`.
pub(crate) fn axis_coordinate(index: usize, iterations: usize, delta: f64, origin: f64) -> f64 {
    (index as f64 - iterations as f64) * delta + origin
}

pub(crate) fn checked_cell_count(rows: usize, cols: usize) -> Result<usize, PlanError> {
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or_else(|| PlanError::GridOverflow {
            reason: format!("{rows} x {cols} cells"),
        })
}

fn axis_extent(
    span: f64,
    delta: f64,
    iterations: usize,
    axis: &str,
) -> Result<usize, PlanError> {
    let steps = (span / delta).round();
    let overflow = || PlanError::GridOverflow {
        reason: format!("{axis} span {span} at spacing {delta}"),
    };
    if !steps.is_finite() || steps > MAX_EXTENT {
        return Err(overflow());
    }
    (steps as usize)
        .checked_add(1)
        .and_then(|n| n.checked_add(iterations.checked_mul(2)?))
        .ok_or_else(overflow)
}
