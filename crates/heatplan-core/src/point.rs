//! The [`Point`] value type and its tolerance-based equality.

use std::fmt;

/// Absolute per-axis tolerance under which two points are the same location.
///
/// Grid sampling matches computed coordinates against stored points with
/// this tolerance, so grid and point spacing must both be coarser than it.
pub const COORD_TOLERANCE: f64 = 1e-3;

/// A 2D coordinate carrying a scalar temperature.
///
/// Equality compares coordinates only, within [`COORD_TOLERANCE`] on each
/// axis; `value` never takes part. The relation is not transitive, so
/// `Point` deliberately does not implement `Eq` or `Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate (maps to grid rows).
    pub x: f64,
    /// Vertical coordinate (maps to grid columns).
    pub y: f64,
    /// Temperature associated with this location.
    pub value: f64,
}

impl Point {
    /// A point at `(x, y)` with a zero value.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, value: 0.0 }
    }

    /// A point at `(x, y)` carrying `value`.
    pub const fn with_value(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }

    /// Returns `true` if both coordinates are strictly within
    /// [`COORD_TOLERANCE`] of `other`'s.
    pub fn coincides(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < COORD_TOLERANCE && (self.y - other.y).abs() < COORD_TOLERANCE
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coincides(other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, value): (f64, f64, f64)) -> Self {
        Self::with_value(x, y, value)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) = {}", self.x, self.y, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_within_tolerance() {
        let a = Point::new(2.0, 2.0);
        let b = Point::new(2.0 + 5e-4, 2.0 - 5e-4);
        assert_eq!(a, b);
        assert!(a.coincides(&b));
    }

    #[test]
    fn tolerance_is_strict() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 2e-3);
        assert_ne!(a, b);
        // Exactly one tolerance apart on x: not equal.
        let c = Point::new(0.0, 0.0);
        let d = Point::new(COORD_TOLERANCE, 0.0);
        assert_ne!(c, d);
    }

    #[test]
    fn value_is_ignored() {
        assert_eq!(Point::with_value(1.0, 1.0, 100.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn both_axes_must_match() {
        let a = Point::new(1.0, 1.0);
        assert_ne!(a, Point::new(1.0, 1.5));
        assert_ne!(a, Point::new(1.5, 1.0));
    }

    #[test]
    fn tuple_conversions() {
        let p: Point = (3.0, 4.0).into();
        assert_eq!(p.value, 0.0);
        let q: Point = (3.0, 4.0, 7.5).into();
        assert_eq!(q.value, 7.5);
        assert_eq!(p, q);
    }

    proptest! {
        #[test]
        fn equality_is_symmetric(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            dx in -2e-3f64..2e-3, dy in -2e-3f64..2e-3,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(ax + dx, ay + dy);
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn equality_is_reflexive(x in -1e6f64..1e6, y in -1e6f64..1e6, v in -1e3f64..1e3) {
            let p = Point::with_value(x, y, v);
            prop_assert!(p == p);
        }
    }
}
