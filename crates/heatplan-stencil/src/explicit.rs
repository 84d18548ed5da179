//! Explicit FTCS five-point stepper with pinned source cells.

use heatplan_grid::{GridBuffers, GridPlan};
use heatplan_region::Region;
use tracing::trace;

use crate::error::StencilError;
use crate::neighbours::neighbours_flat;

/// Sequential explicit heat-equation stepper.
///
/// Each step computes, for every cell of the padded grid,
/// `u' = u + lambda * (sum(neighbours) - 4u)` with off-grid neighbours
/// reading zero, then overwrites every pinned cell with its fixed value.
/// `lambda` is taken as given; values above the conventional stability
/// bound will diverge.
#[derive(Clone, Debug)]
pub struct ExplicitStencil {
    lambda: f64,
    sources: Vec<(usize, f64)>,
}

impl ExplicitStencil {
    /// Stepper with coefficient `lambda` and no pinned cells.
    pub fn new(lambda: f64) -> Result<Self, StencilError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(StencilError::InvalidLambda { value: lambda });
        }
        Ok(Self {
            lambda,
            sources: Vec::new(),
        })
    }

    /// Stepper for `plan` with the cells covered by `source` pinned.
    pub fn for_plan(plan: &GridPlan, source: &Region) -> Result<Self, StencilError> {
        Ok(Self::new(plan.lambda)?.with_sources(fixed_cells(source, plan)))
    }

    /// Pin `(flat_index, value)` cells. Replaces any earlier set.
    pub fn with_sources(mut self, sources: Vec<(usize, f64)>) -> Self {
        self.sources = sources;
        self
    }

    /// The coefficient in use.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Pinned cells as `(flat_index, value)`.
    pub fn sources(&self) -> &[(usize, f64)] {
        &self.sources
    }

    /// Advance one step. On return `buffers.u1()` holds the new state.
    pub fn step(&self, buffers: &mut GridBuffers) -> Result<(), StencilError> {
        self.check_sources(buffers.len())?;
        self.step_unchecked(buffers);
        Ok(())
    }

    /// Advance `steps` steps.
    pub fn run(&self, buffers: &mut GridBuffers, steps: usize) -> Result<(), StencilError> {
        self.check_sources(buffers.len())?;
        for n in 0..steps {
            trace!(step = n, "stencil step");
            self.step_unchecked(buffers);
        }
        Ok(())
    }

    /// Advance `plan.iterations` steps, the full horizon the halo was sized for.
    pub fn run_plan(
        &self,
        buffers: &mut GridBuffers,
        plan: &GridPlan,
    ) -> Result<(), StencilError> {
        self.run(buffers, plan.iterations)
    }

    fn check_sources(&self, cells: usize) -> Result<(), StencilError> {
        match self.sources.iter().find(|(i, _)| *i >= cells) {
            Some(&(index, _)) => Err(StencilError::SourceOutOfGrid { index, cells }),
            None => Ok(()),
        }
    }

    fn step_unchecked(&self, buffers: &mut GridBuffers) {
        let rows = buffers.rows();
        let cols = buffers.cols();
        let (prev, next) = buffers.split_mut();

        for r in 0..rows {
            for c in 0..cols {
                let i = r * cols + c;
                let sum: f64 = neighbours_flat(r, c, rows, cols)
                    .iter()
                    .map(|&n| prev[n])
                    .sum();
                next[i] = prev[i] + self.lambda * (sum - 4.0 * prev[i]);
            }
        }
        for &(i, v) in &self.sources {
            next[i] = v;
        }
        buffers.swap();
    }
}

/// Flat indices and values of every grid cell the source region covers.
///
/// These are the cells whose temperature stays fixed while stepping.
pub fn fixed_cells(source: &Region, plan: &GridPlan) -> Vec<(usize, f64)> {
    let mut out = Vec::new();
    for i in 0..plan.rows {
        for j in 0..plan.cols {
            let p = plan.coordinate(i, j);
            if source.contains(&p) {
                out.push((plan.index(i, j), source.compute_u(&p)));
            }
        }
    }
    out
}
