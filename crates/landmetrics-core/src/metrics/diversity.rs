//! Class diversity indices over the non-missing values of a sequence.
//!
//! Values are grouped by exact equality; cell positions do not matter.
use crate::classes::ClassCounts;

/// Simpson diversity `1 − Σ p_i²`.
///
/// Probability that two cells drawn with replacement belong to different
/// classes. `None` when there is no valid value.
pub fn simpson(values: &[f64]) -> Option<f64> {
    simpson_of(&ClassCounts::tally(values))
}

/// Shannon diversity `H = −Σ p_i·ln(p_i)` (natural log).
/// `None` when there is no valid value.
pub fn shannon(values: &[f64]) -> Option<f64> {
    shannon_of(&ClassCounts::tally(values))
}

/// Shannon evenness `H / ln(S)`, with S the number of distinct classes.
///
/// Lies in [0, 1]; 1 when all classes are equally common. `None` with fewer
/// than two valid values or fewer than two classes.
pub fn shannon_evenness(values: &[f64]) -> Option<f64> {
    shannon_evenness_of(&ClassCounts::tally(values))
}

pub(crate) fn simpson_of(tally: &ClassCounts) -> Option<f64> {
    if tally.total() == 0 {
        return None;
    }
    let d: f64 = tally.proportions().map(|p| p * p).sum();
    Some(1.0 - d)
}

pub(crate) fn shannon_of(tally: &ClassCounts) -> Option<f64> {
    if tally.total() == 0 {
        return None;
    }
    Some(entropy(tally))
}

pub(crate) fn shannon_evenness_of(tally: &ClassCounts) -> Option<f64> {
    let s = tally.n_classes();
    if tally.total() < 2 || s < 2 {
        return None;
    }
    Some(entropy(tally) / (s as f64).ln())
}

fn entropy(tally: &ClassCounts) -> f64 {
    let mut h = 0.0;
    for p in tally.proportions() {
        h -= p * p.ln();
    }
    h
}
