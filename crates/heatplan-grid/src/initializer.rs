//! Grid initializer: sample a source region at every padded grid cell.

use heatplan_core::Point;
use heatplan_region::Region;
use tracing::debug;

use crate::buffers::GridBuffers;
use crate::config::validate_space_step;
use crate::error::PlanError;
use crate::planner::{axis_coordinate, checked_cell_count, GridPlan};

/// Build the initial `(U1, U2)` pair for a `rows x cols` padded grid.
///
/// Cell `(i, j)` samples `source` at
/// `x = (i - iterations) * delta + min_x`, `y = (j - iterations) * delta + min_y`
/// where `(min_x, min_y)` is the lower corner of `target`'s bounding box.
/// Both buffers receive the same values.
pub fn initialize(
    source: &Region,
    target: &Region,
    rows: usize,
    cols: usize,
    iterations: usize,
    delta: f64,
) -> Result<GridBuffers, PlanError> {
    validate_space_step(delta)?;
    let origin = target.bounds()?.min();
    checked_cell_count(rows, cols)?;
    Ok(sample_grid(source, rows, cols, iterations, delta, origin))
}

impl GridBuffers {
    /// Sample `source` over the grid described by `plan`.
    pub fn sample(source: &Region, plan: &GridPlan) -> Self {
        sample_grid(
            source,
            plan.rows,
            plan.cols,
            plan.iterations,
            plan.delta,
            plan.origin,
        )
    }
}

fn sample_grid(
    source: &Region,
    rows: usize,
    cols: usize,
    iterations: usize,
    delta: f64,
    origin: (f64, f64),
) -> GridBuffers {
    let mut u = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        let x = axis_coordinate(i, iterations, delta, origin.0);
        for j in 0..cols {
            let y = axis_coordinate(j, iterations, delta, origin.1);
            u.push(source.compute_u(&Point::new(x, y)));
        }
    }
    debug!(
        cells = u.len(),
        nonzero = u.iter().filter(|v| **v != 0.0).count(),
        "grid initialized"
    );
    GridBuffers::mirrored(rows, cols, u)
}
