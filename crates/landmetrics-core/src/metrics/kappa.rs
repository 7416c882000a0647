//! Kappa agreement indices.
//!
//! Two different statistics share the `(Po − Pe) / (1 − Pe)` form:
//!
//! - [`kappa_self`] scores spatial self-agreement inside one window. Po is the
//!   share of like-with-like neighbour edges; Pe weights each class's share of
//!   outgoing edges by its cell proportion: `Pe = Σ_i p_i · Σ_k g_ik`.
//! - [`kappa_pairwise`] is Cohen's kappa between two maps over the same cells,
//!   with Pe from the independent row and column marginals.
//!
//! The expected-agreement terms differ on purpose; do not swap one for the
//! other.
use crate::classes::{ClassCounts, ClassIndex};
use crate::error::{ensure_same_len, Result};
use crate::matrix::CountMatrix;
use crate::window::{paired_valid, Window};

/// Kappa for a single-class input, and for any input whose expected
/// agreement reaches 1.
pub const KAPPA_DEGENERATE: f64 = 0.0;

/// Spatial self-agreement kappa of a flat row-major square window.
///
/// Never fails: an empty or non-square input, fewer than two valid cells, or
/// no neighbour pair with both cells valid all give `None`.
pub fn kappa_self(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let window = Window::new(values)?;
    kappa_self_of(&window)
}

pub(crate) fn kappa_self_of(window: &Window<'_>) -> Option<f64> {
    let tally = ClassCounts::tally(window.cells());
    if tally.total() < 2 {
        return None;
    }
    if tally.n_classes() == 1 {
        return Some(KAPPA_DEGENERATE);
    }

    let adjacency = CountMatrix::adjacency(window, tally.index());
    let n_adj = adjacency.total();
    if n_adj == 0 {
        return None;
    }

    let n = adjacency.n_classes();
    let n_adj = n_adj as f64;
    let g = |i: usize, k: usize| adjacency.get(i, k) as f64 / n_adj;

    let po: f64 = (0..n).map(|i| g(i, i)).sum();
    let pe: f64 = tally
        .proportions()
        .enumerate()
        .map(|(i, p_i)| p_i * (0..n).map(|k| g(i, k)).sum::<f64>())
        .sum();

    Some(agreement_beyond_chance(po, pe))
}

/// Cohen's kappa between two maps sampled at the same positions.
///
/// Only positions where both maps are valid take part. Errors with
/// `LengthMismatch` when the maps differ in length; returns `Ok(None)` with
/// fewer than two jointly valid positions.
pub fn kappa_pairwise(x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    ensure_same_len(x, y)?;

    let joint: Vec<(f64, f64)> = paired_valid(x, y).collect();
    if joint.len() < 2 {
        return Ok(None);
    }

    let index = ClassIndex::from_values(joint.iter().flat_map(|&(a, b)| [a, b]));
    if index.len() == 1 {
        return Ok(Some(KAPPA_DEGENERATE));
    }

    let confusion = CountMatrix::confusion(joint.iter().copied(), &index);
    let n_valid = joint.len() as f64;

    let po = confusion.trace() as f64 / n_valid;
    let pe: f64 = confusion
        .row_sums()
        .into_iter()
        .zip(confusion.col_sums())
        .map(|(row, col)| (row as f64 / n_valid) * (col as f64 / n_valid))
        .sum();

    Ok(Some(agreement_beyond_chance(po, pe)))
}

fn agreement_beyond_chance(po: f64, pe: f64) -> f64 {
    if pe >= 1.0 {
        return KAPPA_DEGENERATE;
    }
    (po - pe) / (1.0 - pe)
}
