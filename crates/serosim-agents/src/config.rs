//! Configuration constants and defaults for the disease course.
//!
//! The [`DiseaseConfig`] struct bundles every tunable of the agent state
//! machine and the forward transmission model so that callers (daily
//! stepper, tests, the engine binary) can override defaults without any
//! process-wide mutable state.

use serde::{Deserialize, Serialize};

/// Configuration for the disease course and forward transmission model.
///
/// Constructed from the engine's YAML configuration at startup and passed
/// by reference into every component that needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseConfig {
    /// Length of the infection course in days (default: 15).
    ///
    /// On day `infection_length` of infection the agent resolves to
    /// either Dead or Recovered-Immune, depending on the fatal-case draw
    /// made at infection time.
    pub infection_length: u32,

    /// Day of infection on which a symptomatic agent enters quarantine
    /// (default: 5).
    pub quarantine_onset_day: u32,

    /// Probability that a non-fatal infection is symptomatic
    /// (default: 0.8). Population-wide, not age-dependent.
    pub probability_symptomatic: f64,

    /// Per-contact probability of transmission from an infected contact
    /// (default: 0.02).
    pub transmission_rate: f64,

    /// Fraction of the population that starts out immune (default: 0.0).
    pub starting_immunity: f64,

    /// Infected fraction of the total population above which lockdown
    /// activates (default: 0.05, i.e. 1/20).
    pub lockdown_threshold: f64,

    /// Multiplier applied to each agent's daily contact count while
    /// lockdown is active (default: 0.5).
    pub lockdown_contact_scale: f64,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            infection_length: 15,
            quarantine_onset_day: 5,
            probability_symptomatic: 0.8,
            transmission_rate: 0.02,
            starting_immunity: 0.0,
            lockdown_threshold: 0.05,
            lockdown_contact_scale: 0.5,
        }
    }
}
