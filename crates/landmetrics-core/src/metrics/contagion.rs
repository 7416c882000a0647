//! Relative contagion index (Li & Reynolds).
//!
//! Measures how clumped the classes of a window are, as a percentage of the
//! maximum possible clumping for the observed class richness:
//!
//!   contagion = (1 + Σ p_ij·ln(p_ij) / (2·ln(n_classes))) × 100
//!
//! where p_ij is the share of directed neighbour edges going from class i to
//! class j. 100 means a single patch; 0 means edges are spread evenly over
//! every class pair.
use crate::classes::ClassIndex;
use crate::error::Result;
use crate::matrix::CountMatrix;
use crate::window::Window;

/// Contagion of a window holding a single class.
pub const CONTAGION_SINGLE_CLASS: f64 = 100.0;

/// Contagion index of a flat row-major square window.
///
/// Errors with `NotSquare` if `values.len()` is not a perfect square.
/// Returns `Ok(None)` with fewer than two valid cells or when no neighbour
/// pair has both cells valid.
pub fn contagion(values: &[f64]) -> Result<Option<f64>> {
    let window = Window::try_new(values)?;
    Ok(contagion_of(&window))
}

pub(crate) fn contagion_of(window: &Window<'_>) -> Option<f64> {
    if window.n_valid() < 2 {
        return None;
    }

    let index = ClassIndex::from_values(window.valid_values());
    let n_classes = index.len();
    if n_classes == 1 {
        return Some(CONTAGION_SINGLE_CLASS);
    }

    let adjacency = CountMatrix::adjacency(window, &index);
    let n_adj = adjacency.total();
    if n_adj == 0 {
        return None;
    }

    let n_adj = n_adj as f64;
    let sum_term: f64 = adjacency
        .nonzero()
        .map(|c| {
            let p = c as f64 / n_adj;
            p * p.ln()
        })
        .sum();

    Some((1.0 + sum_term / (2.0 * (n_classes as f64).ln())) * 100.0)
}
