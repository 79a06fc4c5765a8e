//! Parameter inference for serosim.
//!
//! Fits epidemiological parameters (antibody half-life, case fatality
//! rate) to observed serology data by repeatedly running a stochastic
//! seroprevalence simulation and minimizing a sum-of-squared-errors
//! objective over a parameter grid:
//!
//! - [`cases`] -- back-dates a death series into an inferred daily
//!   new-infection series
//! - [`serology`] -- sensitivity/specificity bias correction for
//!   observed seroprevalence
//! - [`objective`] -- the stochastic simulation and its fit error
//! - [`search`] -- exhaustive 1-D and 2-D grid search over noisy
//!   objective evaluations
//! - [`error`] -- the inference error taxonomy
//!
//! Infeasible sampling (a day demanding more new infections than there
//! are eligible agents) is a discriminated error, not a sentinel value:
//! the objective returns `Err`, and the optimizer scores that grid point
//! as [`f64::INFINITY`] so the scan continues.

pub mod cases;
pub mod error;
pub mod objective;
pub mod search;
pub mod serology;

pub use cases::infer_cases;
pub use error::InferenceError;
pub use objective::{FitParams, InferenceConfig, simulate};
pub use search::{GridFit, GridFit2, GridSpec, grid_search, grid_search_2d};
pub use serology::SerologyTest;
