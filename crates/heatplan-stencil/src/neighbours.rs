//! 4-connected neighbour lookup on a row-major grid with absorbing edges.

use smallvec::SmallVec;

/// Flat indices of the in-grid 4-connected neighbours of `(r, c)`.
///
/// Off-grid neighbours are dropped, which makes them contribute zero to
/// a sum.
pub(crate) fn neighbours_flat(r: usize, c: usize, rows: usize, cols: usize) -> SmallVec<[usize; 4]> {
    let mut out = SmallVec::new();
    if r > 0 {
        out.push((r - 1) * cols + c);
    }
    if r + 1 < rows {
        out.push((r + 1) * cols + c);
    }
    if c > 0 {
        out.push(r * cols + (c - 1));
    }
    if c + 1 < cols {
        out.push(r * cols + (c + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_four() {
        let nbs = neighbours_flat(1, 1, 3, 3);
        assert_eq!(nbs.as_slice(), &[1, 7, 3, 5]);
    }

    #[test]
    fn corner_has_two() {
        let nbs = neighbours_flat(0, 0, 3, 3);
        assert_eq!(nbs.as_slice(), &[3, 1]);
        let nbs = neighbours_flat(2, 2, 3, 3);
        assert_eq!(nbs.as_slice(), &[5, 7]);
    }

    #[test]
    fn single_cell_has_none() {
        assert!(neighbours_flat(0, 0, 1, 1).is_empty());
    }
}
