//! Error types for stencil stepping.

use std::fmt;

/// Errors from constructing or running an [`ExplicitStencil`](crate::ExplicitStencil).
#[derive(Clone, Debug, PartialEq)]
pub enum StencilError {
    /// `lambda` is NaN, infinite, or negative.
    InvalidLambda {
        /// The invalid value.
        value: f64,
    },
    /// A pinned source cell lies outside the buffers being stepped.
    SourceOutOfGrid {
        /// Flat index of the offending cell.
        index: usize,
        /// Cells in the grid.
        cells: usize,
    },
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLambda { value } => {
                write!(f, "lambda must be finite and non-negative, got {value}")
            }
            Self::SourceOutOfGrid { index, cells } => {
                write!(f, "source cell {index} outside grid of {cells} cells")
            }
        }
    }
}

impl std::error::Error for StencilError {}
