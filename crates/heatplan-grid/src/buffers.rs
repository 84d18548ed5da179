//! Double-buffered grid storage.

use crate::error::PlanError;

/// Two same-shape row-major `f64` grids for a read-one/write-other stencil.
///
/// Freshly initialized buffers hold identical values. A solver reads
/// [`u1`](GridBuffers::u1), writes [`u2`](GridBuffers::u2) through
/// [`split_mut`](GridBuffers::split_mut), then calls
/// [`swap`](GridBuffers::swap) so the newest state is always `u1`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridBuffers {
    rows: usize,
    cols: usize,
    u1: Vec<f64>,
    u2: Vec<f64>,
}

impl GridBuffers {
    pub(crate) fn mirrored(rows: usize, cols: usize, u1: Vec<f64>) -> Self {
        debug_assert_eq!(u1.len(), rows * cols);
        let u2 = u1.clone();
        Self { rows, cols, u1, u2 }
    }

    /// Wrap existing buffers, checking both match `rows * cols`.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        u1: Vec<f64>,
        u2: Vec<f64>,
    ) -> Result<Self, PlanError> {
        let expected = crate::planner::checked_cell_count(rows, cols)?;
        for buf in [&u1, &u2] {
            if buf.len() != expected {
                return Err(PlanError::ShapeMismatch {
                    expected,
                    found: buf.len(),
                });
            }
        }
        Ok(Self { rows, cols, u1, u2 })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells per buffer.
    pub fn len(&self) -> usize {
        self.u1.len()
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.u1.is_empty()
    }

    /// Current state.
    pub fn u1(&self) -> &[f64] {
        &self.u1
    }

    /// Scratch state.
    pub fn u2(&self) -> &[f64] {
        &self.u2
    }

    /// Mutable current state.
    pub fn u1_mut(&mut self) -> &mut [f64] {
        &mut self.u1
    }

    /// Read the current state while writing the scratch one.
    pub fn split_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.u1, &mut self.u2)
    }

    /// Exchange current and scratch.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.u1, &mut self.u2);
    }

    /// Current value at `(i, j)`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.u1[i * self.cols + j])
        } else {
            None
        }
    }

    /// Give up ownership as `(u1, u2)`.
    pub fn into_inner(self) -> (Vec<f64>, Vec<f64>) {
        (self.u1, self.u2)
    }
}
