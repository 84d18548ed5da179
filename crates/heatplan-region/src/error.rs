//! Error types for region queries.

use std::fmt;

/// Errors arising from bounding-box queries on a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The region is a point set with zero points.
    EmptyPointSet,
    /// The region is continuous and has no finite point list to bound.
    NotDiscrete,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => write!(f, "region has no points to bound"),
            Self::NotDiscrete => {
                write!(f, "bounding box requested on a continuous region")
            }
        }
    }
}

impl std::error::Error for RegionError {}
