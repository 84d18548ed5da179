//! Axis-aligned bounding boxes over point sets.

use crate::point::Point;

/// Axis-aligned bounding box, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest x coordinate.
    pub min_x: f64,
    /// Smallest y coordinate.
    pub min_y: f64,
    /// Largest x coordinate.
    pub max_x: f64,
    /// Largest y coordinate.
    pub max_y: f64,
}

impl Bounds {
    /// The fold identity: every real coordinate shrinks it.
    ///
    /// `min` sits at `+inf` and `max` at `-inf`, which is what an extremum
    /// scan over zero points reports.
    pub const EMPTY: Bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Fold a sequence of points into their bounding box.
    ///
    /// Returns [`Bounds::EMPTY`] for an empty sequence.
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        points.into_iter().fold(Self::EMPTY, |b, p| b.include(p))
    }

    /// Grow the box to cover `p`.
    pub fn include(self, p: &Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// `(min_x, min_y)`.
    pub fn min(&self) -> (f64, f64) {
        (self.min_x, self.min_y)
    }

    /// `(max_x, max_y)`.
    pub fn max(&self) -> (f64, f64) {
        (self.max_x, self.max_y)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns `true` if every corner is finite (i.e. at least one point was folded in).
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Returns `true` if `p` lies inside the box (inclusive).
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
