//! Landscape-ecology metrics over small categorical raster windows.
//!
//! Every operation is a pure function of one or two flat `f64` sequences and
//! returns one scalar. Window metrics read the sequence as a row-major square
//! grid. Missing cells are NaN ([`MISSING`]) and are left out of every count.
//!
//! Results come in three kinds:
//! - `Err(MetricError)` for a broken call contract (length mismatch, or a
//!   non-square window passed to [`contagion`]);
//! - `None` when the call is well-formed but the data cannot support the
//!   statistic;
//! - `Some(v)` otherwise, including the defined values for degenerate inputs
//!   ([`CONTAGION_SINGLE_CLASS`], [`KAPPA_DEGENERATE`]).
//!
//! ```
//! use landmetrics_core::{contagion, kappa_self, MISSING};
//!
//! let window = [1.0, 2.0, 2.0, 1.0];
//! assert_eq!(contagion(&window).unwrap(), Some(50.0));
//! assert_eq!(kappa_self(&window), Some(-1.0));
//! assert_eq!(kappa_self(&[MISSING; 4]), None);
//! ```
pub mod classes;
pub mod error;
pub mod matrix;
pub mod metric;
pub mod metrics;
pub mod summary;
pub mod window;

pub use classes::{ClassCounts, ClassIndex};
pub use error::{MetricError, Result};
pub use matrix::CountMatrix;
pub use metric::{Metric, MetricSet};
pub use metrics::{
    contagion, dist_chebyshev, dist_euclidean, dist_manhattan, kappa_pairwise, kappa_self, rmse,
    shannon, shannon_evenness, simpson, CONTAGION_SINGLE_CLASS, KAPPA_DEGENERATE,
};
pub use summary::{summarize_window, WindowSummary};
pub use window::{is_missing, paired_valid, square_side, Window, MISSING};
