//! Scenario definition: the regions and steps of one run.
//!
//! A scenario is the "what to solve" half of a run. The same scenario can be
//! handed to any solver that consumes [`GridBuffers`].

use std::fmt;

use heatplan_region::Region;

use crate::buffers::GridBuffers;
use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::planner::GridPlan;

/// Source and target regions plus step parameters.
#[derive(Clone)]
pub struct Scenario {
    /// Human-readable name for logging and reports.
    pub name: String,
    /// Region supplying known temperatures.
    pub source: Region,
    /// Region whose bounding box is the solved area. Must be a non-empty point set.
    pub target: Region,
    /// Time step, space step, and horizon.
    pub config: PlanConfig,
}

/// Output of [`Scenario::run_setup`]: the plan and its initialized buffers.
#[derive(Clone, Debug)]
pub struct Setup {
    /// Grid shape and step parameters.
    pub plan: GridPlan,
    /// Initial state, `u1 == u2`.
    pub buffers: GridBuffers,
}

impl Scenario {
    /// Assemble a scenario.
    pub fn new(name: impl Into<String>, source: Region, target: Region, config: PlanConfig) -> Self {
        Self {
            name: name.into(),
            source,
            target,
            config,
        }
    }

    /// Plan the grid for this scenario's target.
    pub fn plan(&self) -> Result<GridPlan, PlanError> {
        GridPlan::new(&self.target, &self.config)
    }

    /// Plan, then sample the source over the planned grid.
    pub fn run_setup(&self) -> Result<Setup, PlanError> {
        let plan = self.plan()?;
        let buffers = GridBuffers::sample(&self.source, &plan);
        Ok(Setup { plan, buffers })
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("source_points", &self.source.len())
            .field("target_points", &self.target.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatplan_region::Shape;

    #[test]
    fn run_setup_matches_plan() {
        let s = Scenario::new(
            "point",
            Region::points([(2.0, 2.0, 100.0)]),
            Region::points([(1.0, 1.0), (3.0, 3.0)]),
            PlanConfig::new(0.2, 1.0, 1.0),
        );
        let setup = s.run_setup().unwrap();
        assert_eq!(setup.plan, s.plan().unwrap());
        assert_eq!(setup.buffers.rows(), setup.plan.rows);
        assert_eq!(setup.buffers.cols(), setup.plan.cols);
        assert_eq!(setup.buffers.u1().iter().sum::<f64>(), 100.0);
    }

    #[test]
    fn continuous_target_is_rejected() {
        let s = Scenario::new(
            "bad",
            Region::uniform(Shape::disk(1.0), 1.0),
            Region::uniform(Shape::disk(1.0), 1.0),
            PlanConfig::new(0.1, 0.1, 0.1),
        );
        assert!(matches!(s.run_setup(), Err(PlanError::Region(_))));
    }

    #[test]
    fn debug_names_scenario() {
        let s = Scenario::new(
            "named",
            Region::points([(0.0, 0.0, 1.0)]),
            Region::points([(0.0, 0.0)]),
            PlanConfig::new(0.1, 0.1, 0.1),
        );
        assert!(format!("{s:?}").contains("named"));
    }
}
