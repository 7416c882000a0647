//! Category bookkeeping for categorical windows.
//!
//! Classes are identified by exact floating-point equality. Values are
//! expected to be small integer-like class codes; no tolerance is applied,
//! so `1.0` and `1.0 + f64::EPSILON` are two different classes.
use crate::window::is_missing;

/// Sorted set of distinct category values, each mapped to a dense index
/// `0..len()` in ascending order. Built fresh for every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassIndex {
    classes: Vec<f64>,
}

impl ClassIndex {
    /// Collect the distinct non-missing values. Missing values are skipped.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut classes: Vec<f64> = values
            .into_iter()
            .filter(|&v| !is_missing(v))
            .map(canonical)
            .collect();
        classes.sort_by(f64::total_cmp);
        classes.dedup();
        Self { classes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Distinct values in ascending order.
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    /// Dense index of `value`, or None if it is missing or not a known class.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if is_missing(value) {
            return None;
        }
        let key = canonical(value);
        self.classes.binary_search_by(|c| c.total_cmp(&key)).ok()
    }
}

/// `-0.0 == 0.0` under exact equality, but not under `total_cmp`.
#[inline]
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Frequency of every class among the non-missing values of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCounts {
    index: ClassIndex,
    counts: Vec<usize>,
    total: usize,
}

impl ClassCounts {
    pub fn tally(values: &[f64]) -> Self {
        let index = ClassIndex::from_values(values.iter().copied());
        let mut counts = vec![0usize; index.len()];
        let mut total = 0usize;

        for &v in values {
            if let Some(i) = index.index_of(v) {
                counts[i] += 1;
                total += 1;
            }
        }

        Self { index, counts, total }
    }

    pub fn index(&self) -> &ClassIndex {
        &self.index
    }

    /// Count per class, aligned with `index().classes()`.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of non-missing values.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn n_classes(&self) -> usize {
        self.index.len()
    }

    /// `count_i / total` per class. Empty when there are no valid values.
    pub fn proportions(&self) -> impl Iterator<Item = f64> + '_ {
        let total = self.total as f64;
        self.counts.iter().map(move |&c| c as f64 / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::MISSING;

    #[test]
    fn index_is_sorted_and_dense() {
        let idx = ClassIndex::from_values([3.0, 1.0, 2.0, 3.0, 1.0]);
        assert_eq!(idx.classes(), &[1.0, 2.0, 3.0]);
        assert_eq!(idx.index_of(1.0), Some(0));
        assert_eq!(idx.index_of(2.0), Some(1));
        assert_eq!(idx.index_of(3.0), Some(2));
        assert_eq!(idx.index_of(4.0), None);
    }

    #[test]
    fn index_skips_missing() {
        let idx = ClassIndex::from_values([MISSING, 5.0, MISSING]);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.index_of(MISSING), None);

        let empty = ClassIndex::from_values([MISSING, MISSING]);
        assert!(empty.is_empty());
    }

    #[test]
    fn exact_equality_no_tolerance() {
        let a = 1.0;
        let b = 1.0 + f64::EPSILON;
        let idx = ClassIndex::from_values([a, b]);
        assert_eq!(idx.len(), 2, "nearby values must stay distinct classes");
    }

    #[test]
    fn signed_zeros_are_one_class() {
        let idx = ClassIndex::from_values([0.0, -0.0]);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.index_of(-0.0), Some(0));
        assert_eq!(idx.index_of(0.0), Some(0));
    }

    #[test]
    fn infinities_are_classes() {
        let idx = ClassIndex::from_values([f64::INFINITY, 1.0, f64::NEG_INFINITY]);
        assert_eq!(idx.classes(), &[f64::NEG_INFINITY, 1.0, f64::INFINITY]);
    }

    #[test]
    fn tally_counts_valid_values_only() {
        let counts = ClassCounts::tally(&[2.0, 1.0, 2.0, MISSING, 2.0]);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.n_classes(), 2);
        assert_eq!(counts.counts(), &[1, 3]);

        let props: Vec<f64> = counts.proportions().collect();
        assert_eq!(props, vec![0.25, 0.75]);
    }

    #[test]
    fn tally_of_all_missing_is_empty() {
        let counts = ClassCounts::tally(&[MISSING; 4]);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.proportions().count(), 0);
    }
}
