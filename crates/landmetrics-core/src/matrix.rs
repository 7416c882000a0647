//! Square count tables over a [`ClassIndex`]: directed adjacency within one
//! window, or cross-tabulation (confusion) between two maps.
use crate::classes::ClassIndex;
use crate::window::Window;

/// `n × n` table of non-negative counts, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    n: usize,
    counts: Vec<u64>,
}

impl CountMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            counts: vec![0; n * n],
        }
    }

    /// Directed adjacency counts of a window.
    ///
    /// Every horizontal and vertical neighbour pair with both cells valid adds
    /// one to `[index(first)][index(second)]`. The table is not symmetrized,
    /// so `[a][b]` and `[b][a]` generally differ.
    pub fn adjacency(window: &Window<'_>, index: &ClassIndex) -> Self {
        let mut m = Self::zeros(index.len());
        for (a, b) in window.adjacent_pairs() {
            if let (Some(i), Some(j)) = (index.index_of(a), index.index_of(b)) {
                m.increment(i, j);
            }
        }
        m
    }

    /// Cross-tabulation of co-located values: `[index(x)][index(y)]` per pair.
    pub fn confusion<I>(pairs: I, index: &ClassIndex) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut m = Self::zeros(index.len());
        for (x, y) in pairs {
            if let (Some(i), Some(j)) = (index.index_of(x), index.index_of(y)) {
                m.increment(i, j);
            }
        }
        m
    }

    #[inline]
    pub fn increment(&mut self, i: usize, j: usize) {
        self.counts[i * self.n + j] += 1;
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.counts[i * self.n + j]
    }

    /// Number of classes (rows = columns).
    pub fn n_classes(&self) -> usize {
        self.n
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Sum of the diagonal (like-with-like counts).
    pub fn trace(&self) -> u64 {
        (0..self.n).map(|i| self.get(i, i)).sum()
    }

    pub fn row_sums(&self) -> Vec<u64> {
        self.counts.chunks(self.n.max(1)).map(|row| row.iter().sum()).collect()
    }

    pub fn col_sums(&self) -> Vec<u64> {
        (0..self.n)
            .map(|j| (0..self.n).map(|i| self.get(i, j)).sum())
            .collect()
    }

    /// Non-zero counts in row-major order.
    pub fn nonzero(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.iter().copied().filter(|&c| c > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::MISSING;

    #[test]
    fn adjacency_is_directed() {
        // 1 2
        // 1 2
        let values = [1.0, 2.0, 1.0, 2.0];
        let window = Window::new(&values).unwrap();
        let index = ClassIndex::from_values(values);
        let m = CountMatrix::adjacency(&window, &index);

        assert_eq!(m.get(0, 1), 2, "two horizontal 1→2 edges");
        assert_eq!(m.get(1, 0), 0, "no 2→1 edge in scan order");
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.total(), 4);
        assert_eq!(m.trace(), 2);
    }

    #[test]
    fn adjacency_ignores_edges_touching_missing() {
        let values = [1.0, MISSING, MISSING, 2.0];
        let window = Window::new(&values).unwrap();
        let index = ClassIndex::from_values(values);
        let m = CountMatrix::adjacency(&window, &index);
        assert_eq!(m.n_classes(), 2);
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn confusion_marginals() {
        let x = [1.0, 1.0, 2.0, 2.0];
        let y = [1.0, 2.0, 2.0, 2.0];
        let index = ClassIndex::from_values(x.iter().chain(y.iter()).copied());
        let m = CountMatrix::confusion(x.iter().copied().zip(y.iter().copied()), &index);

        assert_eq!(m.row_sums(), vec![2, 2]);
        assert_eq!(m.col_sums(), vec![1, 3]);
        assert_eq!(m.trace(), 3);
        assert_eq!(m.total(), 4);
    }

    #[test]
    fn empty_matrix_sums() {
        let m = CountMatrix::zeros(0);
        assert_eq!(m.total(), 0);
        assert!(m.row_sums().is_empty());
        assert!(m.col_sums().is_empty());
        assert_eq!(m.nonzero().count(), 0);
    }
}
