//! One simulated day of the forward outbreak.
//!
//! Per-day order of operations, matching the aggregate-then-transmit
//! structure of the daily loop:
//!
//! 1. Record aggregates (infected count, immune fraction among living,
//!    cumulative deaths) from the state left by the previous day
//! 2. Recompute the lockdown flag from that infected count
//! 3. Run the contact round over the circulating set
//! 4. Compute the daily effective reproduction number
//! 5. Advance every agent's infection course by one day

use rand::Rng;
use serosim_agents::DiseaseConfig;
use serosim_types::{Day, DayRecord};
use tracing::debug;

use crate::population::Population;
use crate::transmission;

/// Execute one complete day of the forward simulation.
///
/// Mutates the population in place and returns the day's aggregate
/// record. The reported `r_effective` is `NaN` on days with no infected
/// circulating agents.
pub fn run_day(
    population: &mut Population,
    day: Day,
    config: &DiseaseConfig,
    rng: &mut impl Rng,
) -> DayRecord {
    let infected = population.infected_count();
    let immune_fraction = population.immune_fraction();
    let deaths = population.cumulative_deaths();

    let lockdown = transmission::lockdown_active(infected, population.len(), config.lockdown_threshold);

    let circulating = population.circulating_indices();
    let log = transmission::run_contact_round(population, &circulating, config, lockdown, rng);
    let r_effective = transmission::effective_reproduction(population, &circulating, &log);

    for agent in population.agents_mut() {
        let _ = agent.advance_day(config);
    }

    debug!(day, infected, deaths, lockdown, "day complete");

    DayRecord {
        day,
        infected: infected as u64,
        immune_fraction,
        deaths,
        r_effective,
    }
}
