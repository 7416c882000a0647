//! Distance and error metrics between two equal-length sequences.
//!
//! Only positions where both values are present count; `m` below is the
//! number of such positions. Every metric errors on a length mismatch and
//! returns `Ok(None)` when `m == 0`.
//!
//! | metric    | value                 |
//! |-----------|-----------------------|
//! | euclidean | `sqrt(Σ d²) / m`      |
//! | manhattan | `Σ |d| / m`           |
//! | chebyshev | `max |d|`             |
//! | rmse      | `sqrt(Σ d² / m)`      |
//!
//! The Euclidean distance is divided by `m`, unlike the usual root sum of
//! squares.
//!
//! A NaN difference (`inf − inf`) poisons every metric, Chebyshev included.
use crate::error::{ensure_same_len, Result};
use crate::window::paired_valid;

pub fn dist_euclidean(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    let reduced = reduce_diffs(x, y, 0.0, |acc, d| acc + d * d)?;
    Ok(reduced.map(|(sum_sq, m)| sum_sq.sqrt() / m as f64))
}

pub fn dist_manhattan(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    let reduced = reduce_diffs(x, y, 0.0, |acc, d| acc + d.abs())?;
    Ok(reduced.map(|(sum_abs, m)| sum_abs / m as f64))
}

/// Largest absolute difference. Not normalized by `m`.
pub fn dist_chebyshev(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    // f64::max drops NaN; keep it so this agrees with the summing metrics.
    let reduced = reduce_diffs(x, y, 0.0, |acc: f64, d: f64| {
        let a = d.abs();
        if a > acc || a.is_nan() {
            a
        } else {
            acc
        }
    })?;
    Ok(reduced.map(|(max_abs, _)| max_abs))
}

/// Root mean square error.
pub fn rmse(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    let reduced = reduce_diffs(x, y, 0.0, |acc, d| acc + d * d)?;
    Ok(reduced.map(|(sum_sq, m)| (sum_sq / m as f64).sqrt()))
}

/// Fold `x[k] − y[k]` over jointly valid positions. Returns the accumulator
/// and the number of positions, or None if there were none.
fn reduce_diffs<F>(x: &[f64], y: &[f64], init: f64, mut step: F) -> Result<Option<(f64, usize)>>
where
    F: FnMut(f64, f64) -> f64,
{
    ensure_same_len(x, y)?;

    let mut acc = init;
    let mut m = 0usize;
    for (a, b) in paired_valid(x, y) {
        acc = step(acc, a - b);
        m += 1;
    }

    Ok((m > 0).then_some((acc, m)))
}
