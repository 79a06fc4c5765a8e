//! Bounded forward simulation loop.
//!
//! Seeds the initial infections, runs [`run_day`] for the configured
//! number of days, and collects one [`DayRecord`] per day. The loop is
//! single-threaded and synchronous; all randomness comes from the
//! injected generator, so a fixed seed reproduces a run exactly.

use rand::Rng;
use serosim_agents::DiseaseConfig;
use serosim_types::{Day, DayRecord};
use tracing::info;

use crate::population::Population;
use crate::tick::run_day;

/// Seed the outbreak by infecting the first `count` agents.
///
/// Immune agents among them shrug the infection off (`infect` is a no-op
/// for them), mirroring a seeding attempt into a partially immune
/// population.
pub fn seed_infections(
    population: &mut Population,
    count: usize,
    config: &DiseaseConfig,
    rng: &mut impl Rng,
) {
    for index in 0..count.min(population.len()) {
        if let Some(agent) = population.get_mut(index) {
            agent.infect(config, rng);
        }
    }
}

/// Run a forward outbreak for `days` simulated days.
///
/// Returns the per-day aggregate records in chronological order.
pub fn run_outbreak(
    population: &mut Population,
    days: Day,
    initial_infections: usize,
    config: &DiseaseConfig,
    rng: &mut impl Rng,
) -> Vec<DayRecord> {
    seed_infections(population, initial_infections, config, rng);

    info!(
        population = population.len(),
        days,
        initial_infections,
        transmission_rate = config.transmission_rate,
        "forward simulation starting"
    );

    let mut records = Vec::with_capacity(days as usize);
    for day in 0..days {
        let record = run_day(population, day, config, rng);
        records.push(record);
    }

    info!(
        final_infected = population.infected_count(),
        total_deaths = population.cumulative_deaths(),
        immune_fraction = population.immune_fraction(),
        "forward simulation complete"
    );

    records
}
