//! Closed-form membership tests for continuous regions.

use heatplan_core::Point;

/// An analytic 2D shape usable as a region predicate.
///
/// Shapes are plain data, so regions built from them are deterministic and
/// trivially `Send + Sync`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Open disk: `(x - cx)^2 + (y - cy)^2 < radius^2`.
    Disk {
        /// Center `(x, y)`.
        center: (f64, f64),
        /// Radius (exclusive).
        radius: f64,
    },
    /// Closed axis-aligned rectangle.
    Rect {
        /// Lower corner `(x, y)`, inclusive.
        min: (f64, f64),
        /// Upper corner `(x, y)`, inclusive.
        max: (f64, f64),
    },
    /// Ring between two radii: `inner^2 <= d^2 < outer^2`.
    Annulus {
        /// Center `(x, y)`.
        center: (f64, f64),
        /// Inner radius (inclusive).
        inner: f64,
        /// Outer radius (exclusive).
        outer: f64,
    },
}

impl Shape {
    /// Disk of `radius` around the origin.
    pub fn disk(radius: f64) -> Self {
        Self::Disk {
            center: (0.0, 0.0),
            radius,
        }
    }

    /// Returns `true` if `p` lies inside the shape.
    pub fn contains(&self, p: &Point) -> bool {
        match *self {
            Self::Disk { center, radius } => dist_sq(center, p) < radius * radius,
            Self::Rect { min, max } => {
                p.x >= min.0 && p.x <= max.0 && p.y >= min.1 && p.y <= max.1
            }
            Self::Annulus {
                center,
                inner,
                outer,
            } => {
                let d = dist_sq(center, p);
                d >= inner * inner && d < outer * outer
            }
        }
    }
}

fn dist_sq(center: (f64, f64), p: &Point) -> f64 {
    let dx = p.x - center.0;
    let dy = p.y - center.1;
    dx * dx + dy * dy
}
