//! The [`Region`] abstraction: a temperature per coordinate.

use std::fmt;
use std::sync::Arc;

use heatplan_core::{Bounds, Point};

use crate::error::RegionError;
use crate::shape::Shape;

/// Temperature reported for coordinates a region does not cover.
pub const BACKGROUND: f64 = 0.0;

/// Membership test for a continuous region. Must be pure.
pub type Predicate = Arc<dyn Fn(&Point) -> bool + Send + Sync>;

/// Value function for a continuous region. Must be pure; only evaluated on
/// points accepted by the paired [`Predicate`].
pub type ValueFn = Arc<dyn Fn(&Point) -> f64 + Send + Sync>;

/// A spatial domain supplying a temperature per coordinate.
///
/// Chosen at construction and immutable afterwards. Query it through
/// [`compute_u`](Region::compute_u); bounding-box queries are only
/// meaningful on a non-empty [`PointSet`](Region::PointSet).
///
/// Cloning is cheap for continuous regions (the closures are shared) and
/// copies the point list for discrete ones.
#[derive(Clone)]
pub enum Region {
    /// Ordered sample points. Duplicates are allowed; the first coincident
    /// point in declaration order wins.
    PointSet(Vec<Point>),
    /// A membership predicate paired with a value function.
    PredicateValue {
        /// Decides whether a coordinate belongs to the region.
        predicate: Predicate,
        /// Temperature at a member coordinate.
        value: ValueFn,
    },
}

impl Region {
    /// Discrete region over the given points, in order.
    pub fn points<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        Self::PointSet(points.into_iter().map(Into::into).collect())
    }

    /// Continuous region from a predicate and a value function.
    pub fn predicate<F, G>(predicate: F, value: G) -> Self
    where
        F: Fn(&Point) -> bool + Send + Sync + 'static,
        G: Fn(&Point) -> f64 + Send + Sync + 'static,
    {
        Self::PredicateValue {
            predicate: Arc::new(predicate),
            value: Arc::new(value),
        }
    }

    /// Continuous region covering `shape`, valued by `value`.
    pub fn shape<G>(shape: Shape, value: G) -> Self
    where
        G: Fn(&Point) -> f64 + Send + Sync + 'static,
    {
        Self::predicate(move |p| shape.contains(p), value)
    }

    /// Continuous region covering `shape` at a constant temperature.
    pub fn uniform(shape: Shape, value: f64) -> Self {
        Self::shape(shape, move |_| value)
    }

    /// Temperature at `p`.
    ///
    /// Point sets return the value of the first stored point coincident
    /// with `p`; continuous regions return `value(p)` when `predicate(p)`
    /// holds. Anything else is [`BACKGROUND`].
    pub fn compute_u(&self, p: &Point) -> f64 {
        match self {
            Self::PointSet(points) => points
                .iter()
                .find(|q| q.coincides(p))
                .map_or(BACKGROUND, |q| q.value),
            Self::PredicateValue { predicate, value } => {
                if predicate(p) {
                    value(p)
                } else {
                    BACKGROUND
                }
            }
        }
    }

    /// Returns `true` if the region supplies its own value at `p`
    /// rather than [`BACKGROUND`].
    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Self::PointSet(points) => points.iter().any(|q| q.coincides(p)),
            Self::PredicateValue { predicate, .. } => predicate(p),
        }
    }

    /// Returns `true` for [`Region::PointSet`].
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::PointSet(_))
    }

    /// Stored points; empty for continuous regions.
    pub fn point_slice(&self) -> &[Point] {
        match self {
            Self::PointSet(points) => points,
            Self::PredicateValue { .. } => &[],
        }
    }

    /// Number of stored points (zero for continuous regions).
    pub fn len(&self) -> usize {
        self.point_slice().len()
    }

    /// Returns `true` if there are no stored points.
    pub fn is_empty(&self) -> bool {
        self.point_slice().is_empty()
    }

    /// Coordinatewise minimum `(x, y)` over the stored points.
    ///
    /// Reports `(+inf, +inf)` when there are none, including for every
    /// continuous region. Prefer [`bounds`](Region::bounds) unless the raw
    /// sentinel is wanted.
    pub fn find_min(&self) -> (f64, f64) {
        Bounds::of(self.point_slice()).min()
    }

    /// Coordinatewise maximum `(x, y)` over the stored points.
    ///
    /// Reports `(-inf, -inf)` when there are none.
    pub fn find_max(&self) -> (f64, f64) {
        Bounds::of(self.point_slice()).max()
    }

    /// Bounding box of the stored points.
    ///
    /// Fails on continuous regions and on empty point sets instead of
    /// returning sentinel extrema.
    pub fn bounds(&self) -> Result<Bounds, RegionError> {
        match self {
            Self::PredicateValue { .. } => Err(RegionError::NotDiscrete),
            Self::PointSet(points) if points.is_empty() => Err(RegionError::EmptyPointSet),
            Self::PointSet(points) => Ok(Bounds::of(points)),
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointSet(points) => f.debug_tuple("PointSet").field(points).finish(),
            Self::PredicateValue { .. } => f
                .debug_struct("PredicateValue")
                .finish_non_exhaustive(),
        }
    }
}

impl FromIterator<Point> for Region {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::PointSet(iter.into_iter().collect())
    }
}
