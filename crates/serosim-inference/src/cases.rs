//! Back-dating a death series into an inferred new-infection series.
//!
//! Deaths lag infections by a fixed number of days, and only a fraction
//! of infections (the case fatality rate) end in death. Reading the
//! death series forward, each death count at positional index `d >=
//! time_to_death` is attributed to new infections on the day at index
//! `d - time_to_death`, scaled up by `1 / cfr`. Days before the lag
//! offset produce no entry.
//!
//! The computation is positional over the chronologically ordered
//! series, not arithmetic on day indices, so gaps in the calendar are
//! tolerated the same way the source data carries them. The constant lag
//! and uniform fatality rate are simplifications the optimizer is meant
//! to partially compensate for via curve fitting.

use serosim_types::{CaseSeries, CountSeries};
use tracing::debug;

use crate::error::InferenceError;

/// Reconstruct the inferred daily new-infection series from a death
/// series and an assumed case fatality rate.
///
/// Counts are integer-truncated. Negative daily death counts (an
/// artifact of differencing noisy cumulative data) pass through as
/// negative case counts; the stepper skips those days.
///
/// # Errors
///
/// Returns [`InferenceError::NonPositiveCfr`] when `cfr <= 0`.
pub fn infer_cases(
    deaths: &CountSeries,
    cfr: f64,
    time_to_death: usize,
) -> Result<CaseSeries, InferenceError> {
    if cfr <= 0.0 {
        return Err(InferenceError::NonPositiveCfr(cfr));
    }

    let days: Vec<_> = deaths.keys().copied().collect();
    let mut cases = CaseSeries::new();
    for (index, death_count) in deaths.values().enumerate() {
        if index < time_to_death {
            continue;
        }
        let Some(&infection_day) = days.get(index - time_to_death) else {
            continue;
        };
        cases.insert(infection_day, (death_count / cfr) as i64);
    }

    debug!(
        total_cases = cases.values().filter(|&&n| n > 0).sum::<i64>(),
        days = cases.len(),
        cfr,
        "case series inferred from deaths"
    );

    Ok(cases)
}
