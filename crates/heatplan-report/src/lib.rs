//! Export and comparison of solved heatplan grids.
//!
//! - [`write_interior`] emits the interior of a padded grid as
//!   `<row> <col> <value>` lines, rows outer and columns inner, with the
//!   halo stripped and indices shifted so the target box starts at `0 0`.
//!   Plotting tools read this format; [`read_interior`] parses it back.
//! - [`validate`] compares two runs cell by cell within
//!   [`VALIDATION_TOLERANCE`].
//!
//! All I/O goes through `std::io::Write` / `BufRead`, so any sink works.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod visualize;

pub use compare::{validate, validate_with_tolerance, CellMismatch, Comparison, VALIDATION_TOLERANCE};
pub use error::ReportError;
pub use visualize::{read_interior, save_interior, write_grid, write_interior, InteriorGrid};
