//! Square categorical windows over flat row-major samples, plus the
//! missing-value helpers shared by every metric.
use crate::error::{MetricError, Result};

/// Missing-value marker. Any NaN counts as missing; every other value,
/// infinities included, is a category.
pub const MISSING: f64 = f64::NAN;

#[inline]
pub fn is_missing(v: f64) -> bool {
    v.is_nan()
}

/// Co-located pairs `(x[k], y[k])` where neither value is missing.
/// Stops at the shorter sequence; callers check lengths first.
pub fn paired_valid<'a>(x: &'a [f64], y: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    x.iter()
        .copied()
        .zip(y.iter().copied())
        .filter(|&(a, b)| !is_missing(a) && !is_missing(b))
}

/// Side length of the square grid holding `len` cells.
///
/// Rounds `sqrt(len)` and then verifies the square exactly, so lengths such
/// as 8 or 15 are rejected instead of being truncated to a smaller window.
pub fn square_side(len: usize) -> Option<usize> {
    let side = (len as f64).sqrt().round() as usize;
    (side.checked_mul(side) == Some(len)).then_some(side)
}

/// A square window over a flat, row-major sample sequence.
/// Row `i` is `cells[i * size .. (i + 1) * size]`.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    cells: &'a [f64],
    size: usize,
}

impl<'a> Window<'a> {
    /// View `cells` as a square window. Returns None if the length is not a
    /// perfect square.
    pub fn new(cells: &'a [f64]) -> Option<Self> {
        square_side(cells.len()).map(|size| Self { cells, size })
    }

    /// Like [`Window::new`] but reports a bad shape as [`MetricError::NotSquare`].
    pub fn try_new(cells: &'a [f64]) -> Result<Self> {
        Self::new(cells).ok_or(MetricError::NotSquare { len: cells.len() })
    }

    /// Window side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells(&self) -> &'a [f64] {
        self.cells
    }

    /// Cell value at (row, col). None when the cell is missing or lies
    /// outside the window.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let v = self.cells[row * self.size + col];
        (!is_missing(v)).then_some(v)
    }

    /// Non-missing cell values in row-major order.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + 'a {
        self.cells.iter().copied().filter(|&v| !is_missing(v))
    }

    pub fn n_valid(&self) -> usize {
        self.valid_values().count()
    }

    /// Directed neighbour pairs where both cells are non-missing.
    ///
    /// All horizontal pairs `(i,j)-(i,j+1)` come first, row by row, followed by
    /// all vertical pairs `(i,j)-(i+1,j)`. Each physical edge is yielded once,
    /// as (first, second) in scan order.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let w = self.size;
        let cells = self.cells;

        let horizontal = (0..w).flat_map(move |r| {
            (0..w.saturating_sub(1)).map(move |c| (cells[r * w + c], cells[r * w + c + 1]))
        });
        let vertical = (0..w.saturating_sub(1)).flat_map(move |r| {
            (0..w).map(move |c| (cells[r * w + c], cells[(r + 1) * w + c]))
        });

        horizontal
            .chain(vertical)
            .filter(|&(a, b)| !is_missing(a) && !is_missing(b))
    }
}
