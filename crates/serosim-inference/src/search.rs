//! Exhaustive grid search over noisy objective evaluations.
//!
//! Each evaluation of the objective is itself stochastic, so the same
//! grid point can yield different errors across calls; the search simply
//! records what it observed and returns the point with the minimum
//! recorded error. Minimum selection is strict-less-than, so ties break
//! to the first occurrence in iteration order.
//!
//! An `Err` from the objective (infeasible sampling) scores the grid
//! point as [`f64::INFINITY`] -- a forced worst score -- and the scan
//! continues. A sweep in which every point is infeasible returns `None`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InferenceError;

/// A 1-D parameter lattice: `low + i * step` for every point `< high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Inclusive lower bound of the sweep.
    pub low: f64,
    /// Exclusive upper bound of the sweep.
    pub high: f64,
    /// Lattice spacing. Must be positive for the grid to be non-empty.
    pub step: f64,
}

impl GridSpec {
    /// Create a grid specification.
    pub const fn new(low: f64, high: f64, step: f64) -> Self {
        Self { low, high, step }
    }

    /// Materialize the lattice points.
    ///
    /// Points are computed as `low + i * step` (index-based, avoiding
    /// accumulation drift). An invalid specification (`step <= 0` or
    /// `high <= low`) yields an empty grid.
    pub fn points(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.high <= self.low {
            return Vec::new();
        }
        let mut points = Vec::new();
        let mut index = 0_u32;
        loop {
            let point = self.step.mul_add(f64::from(index), self.low);
            if point >= self.high {
                return points;
            }
            points.push(point);
            index += 1;
        }
    }
}

/// Best grid point found by a 1-D sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit {
    /// The parameter value achieving the minimum recorded error.
    pub value: f64,
    /// The minimum recorded error.
    pub error: f64,
}

/// Best grid point found by a 2-D sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFit2 {
    /// Best value of the first (outer) parameter.
    pub first: f64,
    /// Best value of the second (inner) parameter.
    pub second: f64,
    /// The minimum recorded error.
    pub error: f64,
}

/// Score one objective evaluation, mapping infeasibility to infinity.
fn score(result: Result<f64, InferenceError>) -> f64 {
    match result {
        Ok(error) => error,
        Err(source) => {
            warn!(error = %source, "objective infeasible, scoring grid point as +inf");
            f64::INFINITY
        }
    }
}

/// Sweep one parameter over the grid and return the minimizer.
///
/// Returns `None` when the grid is empty or every evaluation was
/// infeasible (nothing beat the initial infinite running minimum).
pub fn grid_search<F>(spec: &GridSpec, mut objective: F) -> Option<GridFit>
where
    F: FnMut(f64) -> Result<f64, InferenceError>,
{
    let mut best_error = f64::INFINITY;
    let mut best_value = None;
    for value in spec.points() {
        let error = score(objective(value));
        debug!(value, error, "grid point evaluated");
        if error < best_error {
            best_error = error;
            best_value = Some(value);
        }
    }
    best_value.map(|value| GridFit {
        value,
        error: best_error,
    })
}

/// Nested sweep over two parameters with independent lattices.
///
/// The first parameter is the outer loop; ties break to the earliest
/// point in row-major iteration order. Returns `None` when either grid
/// is empty or every evaluation was infeasible.
pub fn grid_search_2d<F>(
    first_spec: &GridSpec,
    second_spec: &GridSpec,
    mut objective: F,
) -> Option<GridFit2>
where
    F: FnMut(f64, f64) -> Result<f64, InferenceError>,
{
    let mut best_error = f64::INFINITY;
    let mut best_pair = None;
    for first in first_spec.points() {
        for second in second_spec.points() {
            let error = score(objective(first, second));
            debug!(first, second, error, "grid point evaluated");
            if error < best_error {
                best_error = error;
                best_pair = Some((first, second));
            }
        }
    }
    best_pair.map(|(first, second)| GridFit2 {
        first,
        second,
        error: best_error,
    })
}
