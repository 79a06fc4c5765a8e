//! The fixed-size agent collection and its filtered views.
//!
//! A [`Population`] is created once per simulation run and never resized:
//! dead agents remain in place with `alive == false`. Every filter below
//! is an O(population) re-scan, the simple and testable baseline; the
//! daily steppers call them once per day.

use rand::Rng;
use serosim_agents::{Agent, DiseaseConfig};

/// A fixed-size ordered collection of [`Agent`]s.
#[derive(Debug, Clone)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Build a population of age-stratified agents (forward mode).
    ///
    /// Each agent draws its age, contact count, and death probability
    /// from the empirical demographics, and starts immune with
    /// probability `config.starting_immunity`.
    pub fn stratified(size: usize, config: &DiseaseConfig, rng: &mut impl Rng) -> Self {
        let agents = (0..size).map(|_| Agent::stratified(config, rng)).collect();
        Self { agents }
    }

    /// Build a population of blank susceptible agents (inference mode).
    pub fn susceptible(size: usize) -> Self {
        let agents = (0..size).map(|_| Agent::susceptible()).collect();
        Self { agents }
    }

    /// Total population size, including dead agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Read-only view of all agents.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view of all agents.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// The agent at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    /// Mutable access to the agent at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Agent> {
        self.agents.get_mut(index)
    }

    /// Number of living agents.
    pub fn living_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Number of currently infected agents.
    pub fn infected_count(&self) -> usize {
        self.agents.iter().filter(|a| a.infected).count()
    }

    /// Cumulative deaths since the population was created.
    pub fn cumulative_deaths(&self) -> u64 {
        (self.len() - self.living_count()) as u64
    }

    /// Indices of circulating agents: living and not quarantined.
    pub fn circulating_indices(&self) -> Vec<usize> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_circulating())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of infection candidates: living, not infected, not immune.
    pub fn candidate_indices(&self) -> Vec<usize> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_candidate())
            .map(|(i, _)| i)
            .collect()
    }

    /// Fraction of living agents that are immune.
    ///
    /// Returns `0.0` for a population with no living agents.
    pub fn immune_fraction(&self) -> f64 {
        let living = self.agents.iter().filter(|a| a.alive);
        let (immune, total) = living.fold((0_u64, 0_u64), |(immune, total), a| {
            (immune + u64::from(a.immune), total + 1)
        });
        if total == 0 {
            0.0
        } else {
            immune as f64 / total as f64
        }
    }

    /// Fraction of living agents with detectable antibodies.
    ///
    /// Returns `0.0` for a population with no living agents.
    pub fn seroprevalence(&self) -> f64 {
        let living = self.agents.iter().filter(|a| a.alive);
        let (sero, total) = living.fold((0_u64, 0_u64), |(sero, total), a| {
            (sero + u64::from(a.seropositive), total + 1)
        });
        if total == 0 {
            0.0
        } else {
            sero as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn susceptible_population_starts_clean() {
        let pop = Population::susceptible(50);
        assert_eq!(pop.len(), 50);
        assert_eq!(pop.living_count(), 50);
        assert_eq!(pop.infected_count(), 0);
        assert_eq!(pop.cumulative_deaths(), 0);
        assert_eq!(pop.candidate_indices().len(), 50);
        assert_eq!(pop.circulating_indices().len(), 50);
        assert!(pop.seroprevalence().abs() < 1e-12);
    }

    #[test]
    fn stratified_population_honors_starting_immunity() {
        let config = DiseaseConfig {
            starting_immunity: 1.0,
            ..DiseaseConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(21);
        let pop = Population::stratified(40, &config, &mut rng);
        assert!((pop.immune_fraction() - 1.0).abs() < 1e-12);
        assert!(pop.candidate_indices().is_empty());
    }

    #[test]
    fn filters_track_state_changes() {
        let mut pop = Population::susceptible(4);
        if let Some(agent) = pop.get_mut(0) {
            agent.alive = false;
        }
        if let Some(agent) = pop.get_mut(1) {
            agent.infected = true;
            agent.quarantined = true;
        }
        if let Some(agent) = pop.get_mut(2) {
            agent.immune = true;
            agent.seropositive = true;
        }
        assert_eq!(pop.living_count(), 3);
        assert_eq!(pop.infected_count(), 1);
        assert_eq!(pop.cumulative_deaths(), 1);
        // Candidates: only index 3 (1 is infected, 2 is immune, 0 dead).
        assert_eq!(pop.candidate_indices(), vec![3]);
        // Circulating: 2 and 3 (0 dead, 1 quarantined).
        assert_eq!(pop.circulating_indices(), vec![2, 3]);
        // One seropositive among three living.
        assert!((pop.seroprevalence() - 1.0 / 3.0).abs() < 1e-12);
        assert!((pop.immune_fraction() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn dead_population_rates_are_zero() {
        let mut pop = Population::susceptible(2);
        for agent in pop.agents_mut() {
            agent.alive = false;
        }
        assert!(pop.immune_fraction().abs() < 1e-12);
        assert!(pop.seroprevalence().abs() < 1e-12);
    }
}
