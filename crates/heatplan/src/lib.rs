//! heatplan: grid preparation for explicit 2D heat-equation solvers.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! heatplan sub-crates. For most users, adding `heatplan` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use heatplan::prelude::*;
//!
//! // A single 100-degree point inside the (1,1)-(3,3) box.
//! let source = Region::points([(2.0, 2.0, 100.0)]);
//! let target = Region::points([(1.0, 1.0), (3.0, 3.0)]);
//!
//! let plan = set_up(&target, 0.2, 1.0, 1.0).unwrap();
//! assert_eq!((plan.rows, plan.cols, plan.iterations), (13, 13, 5));
//!
//! let mut buffers = GridBuffers::sample(&source, &plan);
//! assert_eq!(buffers.get(6, 6), Some(100.0));
//!
//! let stencil = ExplicitStencil::for_plan(&plan, &source).unwrap();
//! stencil.run_plan(&mut buffers, &plan).unwrap();
//!
//! let mut text = Vec::new();
//! heatplan::report::write_grid(&mut text, &buffers, &plan).unwrap();
//! assert_eq!(String::from_utf8(text).unwrap().lines().count(), 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `heatplan-core` | `Point`, `Bounds`, coordinate tolerance |
//! | [`region`] | `heatplan-region` | `Region`, `Shape`, `RegionError` |
//! | [`grid`] | `heatplan-grid` | Planner, initializer, buffers, scenarios |
//! | [`stencil`] | `heatplan-stencil` | Reference sequential stepper |
//! | [`report`] | `heatplan-report` | Interior text export and run comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`heatplan-core`).
pub use heatplan_core as types;

/// Spatial regions (`heatplan-region`).
pub use heatplan_region as region;

/// Discretization planning and grid initialization (`heatplan-grid`).
pub use heatplan_grid as grid;

/// Reference explicit stepper (`heatplan-stencil`).
pub use heatplan_stencil as stencil;

/// Export and comparison (`heatplan-report`).
pub use heatplan_report as report;

/// Common imports for typical usage.
///
/// ```rust
/// use heatplan::prelude::*;
/// ```
pub mod prelude {
    pub use heatplan_core::{Bounds, Point};
    pub use heatplan_grid::{
        initialize, set_up, ConfigError, GridBuffers, GridPlan, PlanConfig, PlanError, Scenario,
        Setup,
    };
    pub use heatplan_region::{Region, RegionError, Shape};
    pub use heatplan_report::{validate, write_interior, Comparison};
    pub use heatplan_stencil::{ExplicitStencil, StencilError};
}
