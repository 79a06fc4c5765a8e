//! The stochastic seroprevalence objective function.
//!
//! One evaluation runs a full simulation of the sample population driven
//! by the inferred case series: each day it records the current
//! seroprevalence, injects that day's inferred new infections into
//! randomly chosen eligible agents, resolves infections that reached the
//! death lag (die with probability `cfr`, otherwise recover immune and
//! seropositive), and lets detectable antibodies wane with the daily
//! probability derived from the half-life. The fit error is the sum of
//! squared differences between the recorded trajectory and the
//! bias-corrected observations at shared day indices.
//!
//! Evaluations are stochastic: the same parameters yield different
//! errors across calls unless the caller fixes the generator seed.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use serosim_core::Population;
use serosim_types::{CountSeries, RateSeries};
use tracing::debug;

use crate::cases;
use crate::error::InferenceError;
use crate::serology::SerologyTest;

/// The two parameters being fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitParams {
    /// Half-life of detectable antibodies, in days.
    pub ab_halflife: f64,
    /// Case fatality rate, as a fraction in `(0, 1]`.
    pub cfr: f64,
}

/// Fixed configuration of the inference simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Size of the simulated sample population (default: 10000).
    pub sample_population: usize,
    /// Days from exposure to death for fatal cases (default: 14).
    pub time_to_death: u32,
    /// Diagnostic characteristics used to bias-correct observations.
    pub test: SerologyTest,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_population: 10_000,
            time_to_death: 14,
            test: SerologyTest::default(),
        }
    }
}

/// Run one stochastic simulation and return the fit error.
///
/// `deaths` is the observed daily death series (rescaled to the sample
/// population) and `serology` the observed seroprevalence fractions.
/// Day indices present in only one of the two series contribute nothing
/// to the error; zero overlap yields an error of 0.
///
/// Negative inferred case counts (artifacts of differencing cumulative
/// death data) skip the rest of that day -- an accepted data quirk, not
/// an error.
///
/// # Errors
///
/// - [`InferenceError::NonPositiveHalfLife`] / `NonPositiveCfr` for
///   out-of-domain parameters
/// - [`InferenceError::InfeasibleSampling`] when a day demands more new
///   infections than there are eligible agents; the evaluation
///   short-circuits immediately
pub fn simulate(
    params: FitParams,
    deaths: &CountSeries,
    serology: &RateSeries,
    config: &InferenceConfig,
    rng: &mut impl Rng,
) -> Result<f64, InferenceError> {
    if params.ab_halflife <= 0.0 {
        return Err(InferenceError::NonPositiveHalfLife(params.ab_halflife));
    }
    let case_series = cases::infer_cases(deaths, params.cfr, config.time_to_death as usize)?;

    let mut population = Population::susceptible(config.sample_population);
    // Daily probability of retaining detectable antibodies.
    let retention = 0.5_f64.powf(1.0 / params.ab_halflife);
    let lag = config.time_to_death;

    let mut predicted = RateSeries::new();
    for (&day, &count) in &case_series {
        predicted.insert(day, population.seroprevalence());

        if count < 0 {
            // Spurious negative dailies: skip the day entirely.
            continue;
        }
        let requested = count as usize;
        let candidates = population.candidate_indices();
        if candidates.len() < requested {
            return Err(InferenceError::InfeasibleSampling {
                day,
                requested: requested as u64,
                available: candidates.len() as u64,
            });
        }
        let chosen: Vec<usize> = candidates.choose_multiple(rng, requested).copied().collect();
        for index in chosen {
            if let Some(agent) = population.get_mut(index) {
                agent.expose(day);
            }
        }

        // Resolve infections that reached the death lag, then apply
        // antibody waning in the same pass: an agent recovering today
        // may lose detectable antibodies the very same day.
        for agent in population.agents_mut() {
            if !agent.alive {
                continue;
            }
            if agent.infected && agent.date_infected.is_some_and(|d0| d0 + lag == day) {
                let fatal = rng.random::<f64>() < params.cfr;
                agent.resolve_infection(fatal);
            }
            if agent.seropositive && rng.random::<f64>() < 1.0 - retention {
                agent.wane_antibodies();
            }
        }
    }

    let mut error = 0.0;
    let mut overlap = 0_usize;
    for (day, simulated) in &predicted {
        if let Some(observed) = serology.get(day) {
            let corrected = config.test.correct(*observed);
            error += (simulated - corrected).powi(2);
            overlap += 1;
        }
    }

    debug!(
        ab_halflife = params.ab_halflife,
        cfr = params.cfr,
        overlap,
        error,
        "objective evaluated"
    );

    Ok(error)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    /// A death series of `len` days starting at day 0, all zero except
    /// the given (day, count) entries.
    fn deaths(len: u32, entries: &[(u32, f64)]) -> CountSeries {
        let mut series: CountSeries = (0..len).map(|d| (d, 0.0)).collect();
        for &(day, count) in entries {
            series.insert(day, count);
        }
        series
    }

    fn config(sample_population: usize) -> InferenceConfig {
        InferenceConfig {
            sample_population,
            ..InferenceConfig::default()
        }
    }

    #[test]
    fn zero_overlap_yields_zero_error() {
        let mut rng = SmallRng::seed_from_u64(61);
        let death_series = deaths(20, &[]);
        // Observations on days the case series never reaches.
        let serology: RateSeries = [(500, 0.2), (510, 0.25)].into_iter().collect();
        let params = FitParams {
            ab_halflife: 90.0,
            cfr: 0.01,
        };
        let error = simulate(params, &death_series, &serology, &config(100), &mut rng);
        assert_eq!(error, Ok(0.0));
    }

    #[test]
    fn infeasible_sampling_is_an_error_not_a_crash() {
        let mut rng = SmallRng::seed_from_u64(62);
        // Day 14's 100 deaths back-date to 200 cases on day 0, far
        // beyond the 50-agent sample population.
        let death_series = deaths(15, &[(14, 100.0)]);
        let serology = RateSeries::new();
        let params = FitParams {
            ab_halflife: 90.0,
            cfr: 0.5,
        };
        let result = simulate(params, &death_series, &serology, &config(50), &mut rng);
        assert!(matches!(
            result,
            Err(InferenceError::InfeasibleSampling { day: 0, requested: 200, available: 50 })
        ));
    }

    #[test]
    fn seroprevalence_is_recorded_before_injection() {
        let mut rng = SmallRng::seed_from_u64(63);
        // Cases exist only on day 0; the trajectory there must be the
        // pre-infection seroprevalence of an all-naive population: 0.
        let death_series = deaths(15, &[(14, 5.0)]);
        let serology: RateSeries = [(0, 0.1)].into_iter().collect();
        let params = FitParams {
            ab_halflife: 90.0,
            cfr: 1.0,
        };
        let test = SerologyTest::default();
        let expected = test.correct(0.1).powi(2);
        let error = simulate(params, &death_series, &serology, &config(100), &mut rng)
            .unwrap_or(f64::NAN);
        assert!((error - expected).abs() < 1e-12);
    }

    #[test]
    fn negative_case_days_are_skipped() {
        let mut rng = SmallRng::seed_from_u64(64);
        // Negative deaths on day 14 back-date to negative cases on day 0.
        let death_series = deaths(15, &[(14, -8.0)]);
        let serology = RateSeries::new();
        let params = FitParams {
            ab_halflife: 90.0,
            cfr: 0.5,
        };
        let error = simulate(params, &death_series, &serology, &config(10), &mut rng);
        // A -16-case day would be infeasible if it were not skipped.
        assert_eq!(error, Ok(0.0));
    }

    #[test]
    fn out_of_domain_parameters_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(65);
        let death_series = deaths(15, &[]);
        let serology = RateSeries::new();
        let bad_halflife = FitParams {
            ab_halflife: 0.0,
            cfr: 0.5,
        };
        assert!(matches!(
            simulate(bad_halflife, &death_series, &serology, &config(10), &mut rng),
            Err(InferenceError::NonPositiveHalfLife(_))
        ));
        let bad_cfr = FitParams {
            ab_halflife: 90.0,
            cfr: 0.0,
        };
        assert!(matches!(
            simulate(bad_cfr, &death_series, &serology, &config(10), &mut rng),
            Err(InferenceError::NonPositiveCfr(_))
        ));
    }

    #[test]
    fn certain_fatality_kills_exposed_agents_at_the_lag() {
        let mut rng = SmallRng::seed_from_u64(66);
        // Deaths on days 14 and 28 -> cases on days 0 and 14. The case
        // series therefore contains day 14, where day 0's infections
        // resolve. With cfr = 1 every one of them dies.
        let death_series = deaths(29, &[(14, 3.0), (28, 0.0)]);
        // Observation on day 14: the 3 exposed agents all died, nobody
        // is seropositive, so the trajectory stays 0.
        let serology: RateSeries = [(14, 0.0)].into_iter().collect();
        let params = FitParams {
            ab_halflife: 1.0e9,
            cfr: 1.0,
        };
        let test = SerologyTest::default();
        // corrected(0) = 1 - specificity; predicted stays 0.
        let expected = (1.0 - test.specificity).powi(2);
        let error = simulate(params, &death_series, &serology, &config(100), &mut rng)
            .unwrap_or(f64::NAN);
        assert!((error - expected).abs() < 1e-12);
    }
}
