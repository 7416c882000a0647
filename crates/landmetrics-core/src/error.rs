//! Error types for landmetrics operations.
//!
//! Only contract violations are errors. A well-shaped call that lacks the data
//! to produce a statistic returns `None` instead.

use thiserror::Error;

/// Hard failure of a metric call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("x and y must have the same length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("input length {len} is not a perfect square")]
    NotSquare { len: usize },

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("{metric} takes {expected} input sequence(s), got {found}")]
    ArityMismatch {
        metric: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for landmetrics operations.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Fail with [`MetricError::LengthMismatch`] unless both sequences are the same length.
pub(crate) fn ensure_same_len(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(MetricError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}
