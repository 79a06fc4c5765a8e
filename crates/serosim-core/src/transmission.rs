//! Forward-mode contact and transmission model.
//!
//! Each simulated day, every circulating agent samples contacts uniformly
//! at random without replacement from the circulating set -- its nominal
//! daily contact count, damped while lockdown is active. Each sampled
//! contact that is currently infected transmits with probability
//! `transmission_rate`; a successful draw invokes the sampling agent's
//! `infect` and credits the infected contact in the onward-transmission
//! log. The log feeds the daily effective reproduction number.
//!
//! Sample sizes are clamped to the circulating set size, so a small
//! late-epidemic contact pool degrades gracefully instead of erroring.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use serosim_agents::DiseaseConfig;
use serosim_types::AgentId;

use crate::population::Population;

/// Per-day onward-transmission log: infector id -> number of successful
/// transmission draws credited to it today.
pub type TransmissionLog = BTreeMap<AgentId, u32>;

/// Whether lockdown is active given the previous day's infected count.
///
/// Lockdown triggers when the infected count strictly exceeds
/// `threshold` times the total population.
pub fn lockdown_active(infected: usize, population: usize, threshold: f64) -> bool {
    infected as f64 > population as f64 * threshold
}

/// Run one day's contact round over the circulating agents.
///
/// `circulating` must be the current circulating index set (the caller
/// computes it once per day and reuses it for the reproduction number).
/// Newly infected agents transmit onward within the same round, matching
/// the live-update semantics of the daily loop.
pub fn run_contact_round(
    population: &mut Population,
    circulating: &[usize],
    config: &DiseaseConfig,
    lockdown: bool,
    rng: &mut impl Rng,
) -> TransmissionLog {
    let mut log: TransmissionLog = circulating
        .iter()
        .filter_map(|&i| population.get(i).map(|a| (a.id, 0)))
        .collect();

    for &target in circulating {
        let Some(agent) = population.get(target) else {
            continue;
        };
        let nominal = agent.daily_contacts;
        let scaled = if lockdown {
            (f64::from(nominal) * config.lockdown_contact_scale) as u32
        } else {
            nominal
        };
        // Clamp: never request more contacts than circulating agents.
        let sample_size = (scaled as usize).min(circulating.len());
        let contacts: Vec<usize> = circulating.choose_multiple(rng, sample_size).copied().collect();

        for contact in contacts {
            let Some(contact_agent) = population.get(contact) else {
                continue;
            };
            let contact_infected = contact_agent.infected;
            let contact_id = contact_agent.id;
            if rng.random::<f64>() < config.transmission_rate && contact_infected {
                if let Some(target_agent) = population.get_mut(target) {
                    target_agent.infect(config, rng);
                }
                if let Some(count) = log.get_mut(&contact_id) {
                    *count += 1;
                }
            }
        }
    }

    log
}

/// Daily effective reproduction number.
///
/// Mean onward transmissions among circulating agents that are infected
/// at the end of the contact round. Returns `NaN` when no such agents
/// exist -- an accepted degenerate output, propagated as data.
pub fn effective_reproduction(
    population: &Population,
    circulating: &[usize],
    log: &TransmissionLog,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_u64;
    for &index in circulating {
        let Some(agent) = population.get(index) else {
            continue;
        };
        if agent.infected {
            sum += f64::from(log.get(&agent.id).copied().unwrap_or(0));
            count += 1;
        }
    }
    if count == 0 { f64::NAN } else { sum / count as f64 }
}
