//! Discretization planning and grid initialization.
//!
//! Turns a target [`Region`](heatplan_region::Region) and a time/space step
//! choice into the padded grid an explicit five-point stencil iterates on.
//!
//! # Pipeline
//!
//! ```text
//! PlanConfig ──► GridPlan::new(target) ──► GridBuffers::sample(source) ──► solver
//!                  rows, cols,               U1 == U2, row-major,
//!                  iterations, lambda        halo = iterations cells
//! ```
//!
//! The halo around the target bounding box is exactly `iterations` cells
//! wide on every side, so a unit-radius stencil applied `iterations` times
//! never carries the grid edge into the target box.
//!
//! [`set_up`] and [`initialize`] expose the same two stages as free
//! functions over raw scalars; [`Scenario`] runs both in one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffers;
pub mod config;
pub mod error;
pub mod initializer;
pub mod planner;
pub mod scenario;

pub use buffers::GridBuffers;
pub use config::{ConfigError, PlanConfig};
pub use error::PlanError;
pub use initializer::initialize;
pub use planner::{set_up, GridPlan, MAX_CELLS};
pub use scenario::{Scenario, Setup};
