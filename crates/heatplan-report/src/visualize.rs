//! Interior text export: `<row> <col> <value>` per line.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use heatplan_grid::{GridBuffers, GridPlan, MAX_CELLS};

use crate::error::{check_shape, ReportError};

/// Write the interior of a padded `rows x cols` grid.
///
/// Skips `iterations` cells of halo on every side and writes one line per
/// remaining cell as `<i - iterations> <j - iterations> <value>`, rows
/// outer and columns inner.
pub fn write_interior<W: Write>(
    mut out: W,
    values: &[f64],
    rows: usize,
    cols: usize,
    iterations: usize,
) -> Result<(), ReportError> {
    check_shape(values.len(), rows, cols)?;
    for i in iterations..rows.saturating_sub(iterations) {
        for j in iterations..cols.saturating_sub(iterations) {
            writeln!(
                out,
                "{} {} {}",
                i - iterations,
                j - iterations,
                values[i * cols + j]
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the current state of `buffers` using the halo from `plan`.
pub fn write_grid<W: Write>(
    out: W,
    buffers: &GridBuffers,
    plan: &GridPlan,
) -> Result<(), ReportError> {
    write_interior(out, buffers.u1(), buffers.rows(), buffers.cols(), plan.iterations)
}

/// [`write_interior`] into a newly created file at `path`.
pub fn save_interior(
    path: impl AsRef<Path>,
    values: &[f64],
    rows: usize,
    cols: usize,
    iterations: usize,
) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_interior(BufWriter::new(file), values, rows, cols, iterations)
}

/// Dense matrix recovered from interior text.
#[derive(Clone, Debug, PartialEq)]
pub struct InteriorGrid {
    /// One more than the largest row index seen.
    pub rows: usize,
    /// One more than the largest column index seen.
    pub cols: usize,
    /// Row-major values; cells absent from the text are 0.0.
    pub values: Vec<f64>,
}

impl InteriorGrid {
    /// Value at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }
}

/// Parse interior text back into a dense matrix.
///
/// Blank lines are skipped. Later lines overwrite earlier ones at the same
/// cell.
pub fn read_interior<R: BufRead>(reader: R) -> Result<InteriorGrid, ReportError> {
    let mut entries = Vec::new();
    let (mut rows, mut cols) = (0usize, 0usize);

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let malformed = |detail| ReportError::MalformedLine {
            line: n + 1,
            detail,
        };
        let (r, c, v) = parse_line(&line).map_err(malformed)?;
        let (r_end, c_end) = r
            .checked_add(1)
            .zip(c.checked_add(1))
            .ok_or_else(|| malformed(format!("index ({r}, {c}) out of range")))?;
        rows = rows.max(r_end);
        cols = cols.max(c_end);
        entries.push((r, c, v));
    }

    let too_large = || ReportError::GridTooLarge { rows, cols };
    let cells = rows
        .checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or_else(too_large)?;
    let mut values = Vec::new();
    values.try_reserve_exact(cells).map_err(|_| too_large())?;
    values.resize(cells, 0.0);
    for (r, c, v) in entries {
        values[r * cols + c] = v;
    }
    Ok(InteriorGrid { rows, cols, values })
}

fn parse_line(line: &str) -> Result<(usize, usize, f64), String> {
    let mut fields = line.split_whitespace();
    let mut next = |name: &str| {
        fields
            .next()
            .ok_or_else(|| format!("missing {name} field"))
    };
    let row = next("row")?;
    let col = next("col")?;
    let value = next("value")?;
    if fields.next().is_some() {
        return Err("more than three fields".to_string());
    }
    let row = row
        .parse::<usize>()
        .map_err(|e| format!("row '{row}': {e}"))?;
    let col = col
        .parse::<usize>()
        .map_err(|e| format!("col '{col}': {e}"))?;
    let value = value
        .parse::<f64>()
        .map_err(|e| format!("value '{value}': {e}"))?;
    Ok((row, col, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_halo_and_shifts_indices() {
        // 4x4 grid, halo 1: interior is the central 2x2.
        let values: Vec<f64> = (0..16).map(f64::from).collect();
        let mut out = Vec::new();
        write_interior(&mut out, &values, 4, 4, 1).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0 0 5\n0 1 6\n1 0 9\n1 1 10\n");
    }

    #[test]
    fn zero_halo_writes_everything() {
        let mut out = Vec::new();
        write_interior(&mut out, &[1.5, 0.0], 1, 2, 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 1.5\n0 1 0\n");
    }

    #[test]
    fn rejects_wrong_length() {
        let mut out = Vec::new();
        assert!(matches!(
            write_interior(&mut out, &[0.0; 3], 2, 2, 0),
            Err(ReportError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn reads_back_what_was_written() {
        let values: Vec<f64> = (0..25).map(|k| k as f64 * 0.5).collect();
        let mut out = Vec::new();
        write_interior(&mut out, &values, 5, 5, 1).unwrap();
        let grid = read_interior(out.as_slice()).unwrap();
        assert_eq!((grid.rows, grid.cols), (3, 3));
        assert_eq!(grid.get(0, 0), Some(values[6]));
        assert_eq!(grid.get(2, 2), Some(values[18]));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn sparse_text_fills_zeros() {
        let grid = read_interior("\n2 1 4.5\n0 0 1\n".as_bytes()).unwrap();
        assert_eq!((grid.rows, grid.cols), (3, 2));
        assert_eq!(grid.values, vec![1.0, 0.0, 0.0, 0.0, 0.0, 4.5]);
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let grid = read_interior("".as_bytes()).unwrap();
        assert_eq!((grid.rows, grid.cols), (0, 0));
        assert!(grid.values.is_empty());
    }

    #[test]
    fn malformed_lines_report_position() {
        let err = read_interior("0 0 1\n0 x 2\n".as_bytes()).unwrap_err();
        match err {
            ReportError::MalformedLine { line, detail } => {
                assert_eq!(line, 2);
                assert!(detail.contains("col"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            read_interior("0 0\n".as_bytes()),
            Err(ReportError::MalformedLine { line: 1, .. })
        ));
        assert!(matches!(
            read_interior("0 0 1 9\n".as_bytes()),
            Err(ReportError::MalformedLine { line: 1, .. })
        ));        assert!(matches!(
            read_interior("0 0 1\n18446744073709551615 0 1\n".as_bytes()),
            Err(ReportError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            read_interior("0 18446744073709551615 1\n".as_bytes()),
            Err(ReportError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn oversized_indices_are_rejected_before_allocating() {
        let text = "4000000000 0 1\n0 4000000000 2\n";
        assert!(matches!(
            read_interior(text.as_bytes()),
            Err(ReportError::GridTooLarge {
                rows: 4_000_000_001,
                cols: 4_000_000_001
            })
        ));
    }
}
