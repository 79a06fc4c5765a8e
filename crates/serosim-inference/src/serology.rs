//! Sensitivity/specificity bias correction for observed seroprevalence.
//!
//! Serology assays misclassify: a test with sensitivity `se` and
//! specificity `sp` reports a positive for a true-positive with
//! probability `se` and for a true-negative with probability `1 - sp`.
//! The expected reported prevalence for a true prevalence `p` is
//! therefore `se * p + (1 - sp) * (1 - p)`, which is what the simulated
//! trajectories are compared against.

use serde::{Deserialize, Serialize};

/// Diagnostic characteristics of the serology assay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerologyTest {
    /// True-positive rate of the assay (default: 0.96).
    pub sensitivity: f64,
    /// True-negative rate of the assay (default: 0.99).
    pub specificity: f64,
}

impl Default for SerologyTest {
    fn default() -> Self {
        Self {
            sensitivity: 0.96,
            specificity: 0.99,
        }
    }
}

impl SerologyTest {
    /// Expected reported seroprevalence for a true prevalence `observed`.
    ///
    /// Satisfies `correct(0) == 1 - specificity` and
    /// `correct(1) == sensitivity`, and is monotonic in `observed`
    /// whenever `sensitivity + specificity > 1`.
    pub fn correct(&self, observed: f64) -> f64 {
        self.sensitivity * observed + (1.0 - self.specificity) * (1.0 - observed)
    }
}
