//! All single-window categorical metrics for one window.
use serde::{Deserialize, Serialize};

use crate::classes::ClassCounts;
use crate::error::Result;
use crate::metrics::contagion::contagion_of;
use crate::metrics::diversity::{shannon_evenness_of, shannon_of, simpson_of};
use crate::metrics::kappa::kappa_self_of;
use crate::window::Window;

/// Categorical summary of one window. `None` fields were not computable and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Window side length.
    pub window_size: usize,
    /// Non-missing cells.
    pub n_valid: usize,
    /// Distinct classes among the valid cells.
    pub n_classes: usize,
    pub contagion: Option<f64>,
    /// Spatial self-agreement kappa.
    pub kappa: Option<f64>,
    pub simpson: Option<f64>,
    pub shannon: Option<f64>,
    pub shannon_evenness: Option<f64>,
}

/// Compute every single-window metric at once, sharing the class tally.
///
/// Errors with `NotSquare` on a bad shape, as [`crate::contagion`] does.
pub fn summarize_window(values: &[f64]) -> Result<WindowSummary> {
    let window = Window::try_new(values)?;
    let tally = ClassCounts::tally(values);

    Ok(WindowSummary {
        window_size: window.size(),
        n_valid: tally.total(),
        n_classes: tally.n_classes(),
        contagion: contagion_of(&window),
        kappa: kappa_self_of(&window),
        simpson: simpson_of(&tally),
        shannon: shannon_of(&tally),
        shannon_evenness: shannon_evenness_of(&tally),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;
    use crate::metrics::{contagion, kappa_self, shannon, shannon_evenness, simpson};
    use crate::window::MISSING;

    #[test]
    fn summary_matches_individual_metrics() {
        let values = [1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 3.0, 3.0, MISSING];
        let s = summarize_window(&values).unwrap();

        assert_eq!(s.window_size, 3);
        assert_eq!(s.n_valid, 8);
        assert_eq!(s.n_classes, 3);
        assert_eq!(s.contagion, contagion(&values).unwrap());
        assert_eq!(s.kappa, kappa_self(&values));
        assert_eq!(s.simpson, simpson(&values));
        assert_eq!(s.shannon, shannon(&values));
        assert_eq!(s.shannon_evenness, shannon_evenness(&values));
    }

    #[test]
    fn single_class_window() {
        let s = summarize_window(&[1.0; 4]).unwrap();
        assert_eq!(s.contagion, Some(100.0));
        assert_eq!(s.kappa, Some(0.0));
        assert_eq!(s.simpson, Some(0.0));
        assert_eq!(s.shannon_evenness, None);
    }

    #[test]
    fn empty_window_is_all_null() {
        let s = summarize_window(&[]).unwrap();
        assert_eq!(s.window_size, 0);
        assert_eq!(s.n_valid, 0);

        let json = serde_json::to_value(&s).unwrap();
        for key in ["contagion", "kappa", "simpson", "shannon", "shannon_evenness"] {
            assert!(json[key].is_null(), "{key} should serialize as null");
        }
    }

    #[test]
    fn non_square_window_fails() {
        assert_eq!(
            summarize_window(&[1.0; 6]).unwrap_err(),
            MetricError::NotSquare { len: 6 }
        );
    }
}
