//! Test utilities and scenario fixtures for heatplan development.
//!
//! Provides the standard scenarios used across the workspace's tests and
//! benchmarks, plus seeded point-set generators.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use heatplan_core::Point;
use heatplan_region::Region;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use fixtures::{
    disk_source, point_source_coarse, point_source_fine, point_source_medium, scenarios,
    HOT_SPOT, POINT_TARGET,
};

/// `n` distinct points on the `spacing` lattice within `[-half, half]`
/// lattice steps of the origin, with values in `[1, 100)`.
///
/// Deterministic for a given `seed`. Panics if `n` exceeds the lattice size.
pub fn scattered_lattice(n: usize, half: i32, spacing: f64, seed: u64) -> Region {
    let side = (2 * half + 1) as usize;
    assert!(n <= side * side, "cannot place {n} distinct points on a {side}x{side} lattice");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut taken = std::collections::HashSet::new();
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let i = rng.random_range(-half..=half);
        let j = rng.random_range(-half..=half);
        if taken.insert((i, j)) {
            let value = rng.random_range(1.0..100.0);
            points.push(Point::with_value(
                i as f64 * spacing,
                j as f64 * spacing,
                value,
            ));
        }
    }
    Region::PointSet(points)
}

/// Corners of the square `[-half, half]^2`, suitable as a target region.
pub fn square_target(half: f64) -> Region {
    Region::points([(-half, -half), (half, half)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_is_seeded_and_distinct() {
        let a = scattered_lattice(20, 5, 0.5, 7);
        let b = scattered_lattice(20, 5, 0.5, 7);
        let pa = a.point_slice();
        let pb = b.point_slice();
        assert_eq!(pa.len(), 20);
        for (p, q) in pa.iter().zip(pb) {
            assert_eq!((p.x, p.y, p.value), (q.x, q.y, q.value));
        }
        for (k, p) in pa.iter().enumerate() {
            assert!(pa[k + 1..].iter().all(|q| !q.coincides(p)));
            assert!((1.0..100.0).contains(&p.value));
        }
    }

    #[test]
    fn square_target_bounds() {
        let b = square_target(15.0).bounds().unwrap();
        assert_eq!(b.min(), (-15.0, -15.0));
        assert_eq!(b.max(), (15.0, 15.0));
    }
}
