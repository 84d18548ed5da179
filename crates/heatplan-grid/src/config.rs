//! Step-size configuration and validation.

use std::error::Error;
use std::fmt;

/// Time/space discretization for one pipeline run.
///
/// `validate()` is run by the planner before any arithmetic, so a
/// `GridPlan` never carries a non-finite `lambda` or iteration count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanConfig {
    /// Time step `gamma` in seconds. Must be finite and positive.
    pub gamma: f64,
    /// Space step `delta` in length units. Must be finite and positive.
    pub delta: f64,
    /// Total simulated time. Must be finite and non-negative.
    pub horizon: f64,
}

impl PlanConfig {
    /// Bundle the three step parameters.
    pub fn new(gamma: f64, delta: f64, horizon: f64) -> Self {
        Self {
            gamma,
            delta,
            horizon,
        }
    }

    /// Check all parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.gamma });
        }
        validate_space_step(self.delta)?;
        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(ConfigError::InvalidHorizon {
                value: self.horizon,
            });
        }
        Ok(())
    }

    /// Explicit-scheme coefficient `gamma / delta^2`.
    ///
    /// Not checked against any stability bound.
    pub fn lambda(&self) -> f64 {
        self.gamma / (self.delta * self.delta)
    }

    /// `horizon / gamma`, truncated. The solver only ever covers
    /// `floor(horizon / gamma) * gamma` of elapsed time.
    pub fn raw_iterations(&self) -> f64 {
        (self.horizon / self.gamma).floor()
    }
}

pub(crate) fn validate_space_step(delta: f64) -> Result<(), ConfigError> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(ConfigError::InvalidSpaceStep { value: delta });
    }
    Ok(())
}

/// Errors detected during [`PlanConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `gamma` is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// `delta` is NaN, infinite, zero, or negative.
    InvalidSpaceStep {
        /// The invalid value.
        value: f64,
    },
    /// `horizon` is NaN, infinite, or negative.
    InvalidHorizon {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { value } => {
                write!(f, "gamma must be finite and positive, got {value}")
            }
            Self::InvalidSpaceStep { value } => {
                write!(f, "delta must be finite and positive, got {value}")
            }
            Self::InvalidHorizon { value } => {
                write!(f, "horizon must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reference_steps() {
        assert!(PlanConfig::new(0.2, 1.0, 1.0).validate().is_ok());
        assert!(PlanConfig::new(0.00125, 0.1, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_gamma() {
        for gamma in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = PlanConfig::new(gamma, 1.0, 1.0).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeStep { .. }));
        }
    }

    #[test]
    fn rejects_bad_delta() {
        for delta in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let err = PlanConfig::new(0.1, delta, 1.0).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSpaceStep { .. }));
        }
    }

    #[test]
    fn rejects_bad_horizon() {
        for horizon in [-0.5, f64::NAN, f64::INFINITY] {
            let err = PlanConfig::new(0.1, 1.0, horizon).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidHorizon { .. }));
        }
    }

    #[test]
    fn lambda_and_truncated_iterations() {
        let c = PlanConfig::new(0.2, 1.0, 1.0);
        assert!((c.lambda() - 0.2).abs() < 1e-12);
        assert_eq!(c.raw_iterations(), 5.0);

        let c = PlanConfig::new(0.3, 0.5, 1.0);
        assert!((c.lambda() - 1.2).abs() < 1e-12);
        assert_eq!(c.raw_iterations(), 3.0);
    }

    #[test]
    fn display_names_the_parameter() {
        let msg = ConfigError::InvalidSpaceStep { value: 0.0 }.to_string();
        assert!(msg.contains("delta"));
    }
}
