//! Error type for planning and initialization.

use std::error::Error;
use std::fmt;

use heatplan_region::RegionError;

use crate::config::ConfigError;

/// Errors raised before any grid allocation takes place.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanError {
    /// The target region cannot supply a bounding box.
    Region(RegionError),
    /// A time, space, or horizon parameter is out of range.
    Config(ConfigError),
    /// The requested grid does not fit in addressable memory.
    GridOverflow {
        /// Which dimension overflowed and by how much.
        reason: String,
    },
    /// A buffer's length disagrees with the declared grid shape.
    ShapeMismatch {
        /// `rows * cols` of the declared shape.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(e) => write!(f, "target region: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::GridOverflow { reason } => write!(f, "grid too large: {reason}"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "buffer has {found} cells, grid shape needs {expected}")
            }
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegionError> for PlanError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}

impl From<ConfigError> for PlanError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
