//! Error taxonomy for the inference engine.

use serosim_types::Day;

/// Errors that can occur while evaluating the inference objective.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    /// A day of the inferred case series demanded more new infections
    /// than there are eligible agents in the sample population.
    ///
    /// This signals that the objective is infeasible for the current
    /// parameters (typically a case fatality rate so low that the
    /// inferred case counts exceed the sample population). The optimizer
    /// treats it as a forced worst score, not a fatal fault.
    #[error("infeasible sampling on day {day}: requested {requested} infections, {available} candidates available")]
    InfeasibleSampling {
        /// The day on which the candidate pool ran out.
        day: Day,
        /// The number of new infections requested.
        requested: u64,
        /// The number of eligible agents remaining.
        available: u64,
    },

    /// The case fatality rate must be strictly positive: case counts are
    /// inferred by dividing death counts by it.
    #[error("case fatality rate must be strictly positive, got {0}")]
    NonPositiveCfr(f64),

    /// The antibody half-life must be strictly positive: the daily decay
    /// probability is derived from its reciprocal.
    #[error("antibody half-life must be strictly positive, got {0}")]
    NonPositiveHalfLife(f64),
}
