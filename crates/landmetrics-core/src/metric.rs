//! Metric selection by name.
//!
//! Callers that pick metrics at run time (from a config file or a scripting
//! layer) name them with the same snake_case identifiers as the functions.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};
use crate::metrics::{
    contagion, dist_chebyshev, dist_euclidean, dist_manhattan, kappa_pairwise, kappa_self, rmse,
    shannon, shannon_evenness, simpson,
};

/// One of the scalar metrics this crate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Contagion,
    KappaSelf,
    KappaPairwise,
    Simpson,
    Shannon,
    ShannonEvenness,
    DistEuclidean,
    DistManhattan,
    DistChebyshev,
    Rmse,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Contagion,
        Metric::KappaSelf,
        Metric::KappaPairwise,
        Metric::Simpson,
        Metric::Shannon,
        Metric::ShannonEvenness,
        Metric::DistEuclidean,
        Metric::DistManhattan,
        Metric::DistChebyshev,
        Metric::Rmse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Contagion => "contagion",
            Metric::KappaSelf => "kappa_self",
            Metric::KappaPairwise => "kappa_pairwise",
            Metric::Simpson => "simpson",
            Metric::Shannon => "shannon",
            Metric::ShannonEvenness => "shannon_evenness",
            Metric::DistEuclidean => "dist_euclidean",
            Metric::DistManhattan => "dist_manhattan",
            Metric::DistChebyshev => "dist_chebyshev",
            Metric::Rmse => "rmse",
        }
    }

    /// Number of input sequences the metric takes (1 or 2).
    pub fn arity(self) -> usize {
        match self {
            Metric::Contagion
            | Metric::KappaSelf
            | Metric::Simpson
            | Metric::Shannon
            | Metric::ShannonEvenness => 1,
            Metric::KappaPairwise
            | Metric::DistEuclidean
            | Metric::DistManhattan
            | Metric::DistChebyshev
            | Metric::Rmse => 2,
        }
    }

    /// Run the metric on `inputs`.
    ///
    /// Each metric keeps its own failure behaviour: `kappa_self` still maps a
    /// bad shape to `Ok(None)` while `contagion` errors. Passing the wrong
    /// number of sequences is an `ArityMismatch`.
    pub fn evaluate(self, inputs: &[&[f64]]) -> Result<Option<f64>> {
        match (self, inputs) {
            (Metric::Contagion, [x]) => contagion(x),
            (Metric::KappaSelf, [x]) => Ok(kappa_self(x)),
            (Metric::Simpson, [x]) => Ok(simpson(x)),
            (Metric::Shannon, [x]) => Ok(shannon(x)),
            (Metric::ShannonEvenness, [x]) => Ok(shannon_evenness(x)),
            (Metric::KappaPairwise, [x, y]) => kappa_pairwise(x, y),
            (Metric::DistEuclidean, [x, y]) => dist_euclidean(x, y),
            (Metric::DistManhattan, [x, y]) => dist_manhattan(x, y),
            (Metric::DistChebyshev, [x, y]) => dist_chebyshev(x, y),
            (Metric::Rmse, [x, y]) => rmse(x, y),
            _ => Err(MetricError::ArityMismatch {
                metric: self.name(),
                expected: self.arity(),
                found: inputs.len(),
            }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| MetricError::UnknownMetric(s.to_string()))
    }
}

/// An ordered list of metrics to run on the same inputs.
/// Serializes as a plain JSON array of metric names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet {
    metrics: Vec<Metric>,
}

impl MetricSet {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    /// Every metric that takes a single window.
    pub fn window_metrics() -> Self {
        Self::new(Metric::ALL.into_iter().filter(|m| m.arity() == 1).collect())
    }

    /// Every metric that compares two sequences.
    pub fn pairwise_metrics() -> Self {
        Self::new(Metric::ALL.into_iter().filter(|m| m.arity() == 2).collect())
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Run every metric on `inputs`, in order. A failing metric does not stop
    /// the others.
    pub fn evaluate(&self, inputs: &[&[f64]]) -> Vec<(Metric, Result<Option<f64>>)> {
        self.metrics.iter().map(|&m| (m, m.evaluate(inputs))).collect()
    }

    pub fn evaluate_window(&self, window: &[f64]) -> Vec<(Metric, Result<Option<f64>>)> {
        self.evaluate(&[window])
    }
}
