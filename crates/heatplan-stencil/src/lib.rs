//! Reference sequential solver for heatplan grids.
//!
//! Advances [`GridBuffers`](heatplan_grid::GridBuffers) with the explicit
//! FTCS five-point update
//!
//! ```text
//! u'[i,j] = u[i,j] + lambda * (u[i-1,j] + u[i+1,j] + u[i,j-1] + u[i,j+1] - 4 u[i,j])
//! ```
//!
//! reading `u1`, writing `u2`, then swapping. Neighbours outside the grid
//! read as zero and cells covered by the source region are pinned to their
//! source value after every step.
//!
//! This is the baseline other solvers are compared against; it makes no
//! attempt at parallelism.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod explicit;
pub(crate) mod neighbours;

pub use error::StencilError;
pub use explicit::{fixed_cells, ExplicitStencil};
