//! Error types for export and comparison.

use std::fmt;
use std::io;

/// Errors from writing, reading, or comparing grids.
#[derive(Debug)]
pub enum ReportError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A line of interior text could not be parsed.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        detail: String,
    },
    /// Indices read back describe a matrix too large to allocate.
    GridTooLarge {
        /// One more than the largest row index seen.
        rows: usize,
        /// One more than the largest column index seen.
        cols: usize,
    },
    /// A buffer's length disagrees with the declared grid shape.
    ShapeMismatch {
        /// `rows * cols` of the declared shape.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedLine { line, detail } => {
                write!(f, "malformed line {line}: {detail}")
            }
            Self::GridTooLarge { rows, cols } => {
                write!(f, "{rows} x {cols} grid is too large to allocate")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "buffer has {found} cells, grid shape needs {expected}")
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub(crate) fn check_shape(len: usize, rows: usize, cols: usize) -> Result<(), ReportError> {
    let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
    if len != expected {
        return Err(ReportError::ShapeMismatch {
            expected,
            found: len,
        });
    }
    Ok(())
}
