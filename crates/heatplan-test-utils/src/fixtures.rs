//! The standard scenarios.
//!
//! - three point-source runs on the `(1,1)-(3,3)` box at decreasing step
//!   sizes, all with horizon 1
//! - a radius-8 disk held at 100 inside a `(-15,-15)-(15,15)` box

use heatplan_grid::{PlanConfig, Scenario};
use heatplan_region::{Region, Shape};
use indexmap::IndexMap;

/// Single 100-degree source point used by the point-source scenarios.
pub const HOT_SPOT: (f64, f64, f64) = (2.0, 2.0, 100.0);

/// Corners of the point-source target box.
pub const POINT_TARGET: [(f64, f64); 2] = [(1.0, 1.0), (3.0, 3.0)];

fn point_source(name: &str, gamma: f64, delta: f64) -> Scenario {
    Scenario::new(
        name,
        Region::points([HOT_SPOT]),
        Region::points(POINT_TARGET),
        PlanConfig::new(gamma, delta, 1.0),
    )
}

/// `gamma = 0.2`, `delta = 1`: a 13x13 grid over 5 steps.
pub fn point_source_coarse() -> Scenario {
    point_source("point_source_coarse", 0.2, 1.0)
}

/// `gamma = 0.005`, `delta = 0.2`.
pub fn point_source_medium() -> Scenario {
    point_source("point_source_medium", 0.005, 0.2)
}

/// `gamma = 0.00125`, `delta = 0.1`.
pub fn point_source_fine() -> Scenario {
    point_source("point_source_fine", 0.00125, 0.1)
}

/// Disk `x^2 + y^2 < 64` at 100 over the `(-15,-15)-(15,15)` box,
/// `delta = 0.2`, ten steps of `gamma = 0.005`.
pub fn disk_source() -> Scenario {
    Scenario::new(
        "disk_source",
        Region::uniform(Shape::disk(8.0), 100.0),
        Region::points([(-15.0, -15.0), (15.0, 15.0)]),
        PlanConfig::new(0.005, 0.2, 0.05),
    )
}

/// Every standard scenario by name, in a stable order.
pub fn scenarios() -> IndexMap<&'static str, fn() -> Scenario> {
    let mut map: IndexMap<&'static str, fn() -> Scenario> = IndexMap::new();
    map.insert("point_source_coarse", point_source_coarse);
    map.insert("point_source_medium", point_source_medium);
    map.insert("point_source_fine", point_source_fine);
    map.insert("disk_source", disk_source);
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_match_scenarios() {
        for (name, build) in scenarios() {
            assert_eq!(build().name, name);
        }
        let names: Vec<_> = scenarios().keys().copied().collect();
        assert_eq!(names[0], "point_source_coarse");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn every_scenario_plans() {
        for build in scenarios().values() {
            assert!(build().plan().is_ok());
        }
    }
}
