//! Cell-by-cell comparison of two solver runs.

use tracing::{debug, warn};

use crate::error::{check_shape, ReportError};

/// Largest absolute difference at which two cells still agree.
pub const VALIDATION_TOLERANCE: f64 = 1e-3;

/// One cell where the runs disagree.
#[derive(Clone, Debug, PartialEq)]
pub struct CellMismatch {
    /// Row index in the padded grid.
    pub row: usize,
    /// Column index in the padded grid.
    pub col: usize,
    /// Value from the reference run.
    pub reference: f64,
    /// Value from the run under test.
    pub candidate: f64,
}

/// Outcome of [`validate`].
#[derive(Clone, Debug, Default)]
pub struct Comparison {
    /// Cells compared.
    pub cells: usize,
    /// Every disagreeing cell, in row-major order.
    pub mismatches: Vec<CellMismatch>,
}

impl Comparison {
    /// Returns `true` if no cell differs beyond tolerance.
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Largest `|reference - candidate|` among the mismatches, or 0.0.
    pub fn max_abs_diff(&self) -> f64 {
        self.mismatches
            .iter()
            .map(|m| (m.reference - m.candidate).abs())
            .fold(0.0, f64::max)
    }
}

/// Compare two `rows x cols` grids with [`VALIDATION_TOLERANCE`].
pub fn validate(
    reference: &[f64],
    candidate: &[f64],
    rows: usize,
    cols: usize,
) -> Result<Comparison, ReportError> {
    validate_with_tolerance(reference, candidate, rows, cols, VALIDATION_TOLERANCE)
}

/// Compare two `rows x cols` grids; cells differing by more than
/// `tolerance` (or where either side is NaN) are reported and logged.
pub fn validate_with_tolerance(
    reference: &[f64],
    candidate: &[f64],
    rows: usize,
    cols: usize,
    tolerance: f64,
) -> Result<Comparison, ReportError> {
    check_shape(reference.len(), rows, cols)?;
    check_shape(candidate.len(), rows, cols)?;

    let mut mismatches = Vec::new();
    for (k, (&a, &b)) in reference.iter().zip(candidate).enumerate() {
        let diff = (a - b).abs();
        if diff.is_nan() || diff > tolerance {
            let (row, col) = (k / cols, k % cols);
            warn!(row, col, reference = a, candidate = b, "cell mismatch");
            mismatches.push(CellMismatch {
                row,
                col,
                reference: a,
                candidate: b,
            });
        }
    }
    debug!(cells = reference.len(), mismatches = mismatches.len(), "runs compared");
    Ok(Comparison {
        cells: reference.len(),
        mismatches,
    })
}
