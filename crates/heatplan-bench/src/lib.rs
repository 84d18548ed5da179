//! Benchmark profiles for the heatplan grid pipeline.
//!
//! - [`reference_profile`]: ~300x300 padded grid over a continuous disk source
//! - [`stress_profile`]: ~1000x1000 padded grid for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use heatplan_grid::{PlanConfig, Scenario};
use heatplan_region::{Region, Shape};

/// Disk of radius 8 at 100 over `(-15,-15)-(15,15)`, `delta = 0.1`, 20 steps.
///
/// 301 interior cells per axis plus a 20-cell halo: 341x341.
pub fn reference_profile() -> Scenario {
    Scenario::new(
        "reference_profile",
        Region::uniform(Shape::disk(8.0), 100.0),
        Region::points([(-15.0, -15.0), (15.0, 15.0)]),
        PlanConfig::new(0.002, 0.1, 0.041),
    )
}

/// Same geometry at `delta = 0.03`: ten steps, roughly a million cells.
pub fn stress_profile() -> Scenario {
    Scenario::new(
        "stress_profile",
        Region::uniform(Shape::disk(8.0), 100.0),
        Region::points([(-15.0, -15.0), (15.0, 15.0)]),
        PlanConfig::new(0.0002, 0.03, 0.0021),
    )
}
