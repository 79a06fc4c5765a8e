//! The [`Agent`] record and its per-day state transitions.
//!
//! One agent moves through the states Susceptible, Infected
//! (presymptomatic), Infected (quarantined or symptomatic),
//! Recovered-Immune, and Dead. Two invariants hold at all times:
//!
//! - A dead agent is never infected, symptomatic, or quarantined.
//! - `immune` is monotonic: once acquired it is never cleared, even when
//!   `seropositive` later toggles off (antibody waning).
//!
//! The fatal-case and symptomatic draws happen exactly once, at infection
//! time, and stay fixed for the whole infection course.

use rand::Rng;
use serosim_types::{AgentId, Day};

use crate::config::DiseaseConfig;
use crate::demographics::{self, AgeBracket};

/// Terminal outcome of an infection course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfectionOutcome {
    /// The agent died on the final day of the infection.
    Died,
    /// The agent recovered with permanent immunity and detectable
    /// antibodies.
    Recovered,
}

impl core::fmt::Display for InfectionOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Died => write!(f, "died"),
            Self::Recovered => write!(f, "recovered"),
        }
    }
}

/// A single simulated individual.
///
/// Static parameters (`age`, `daily_contacts`, `prob_death`) are derived
/// from the age bracket at creation time and never change. The remaining
/// fields are mutated once per simulated day by the daily stepper and by
/// the transmission model. Agents are never destroyed within a run; a
/// dead agent remains a record with `alive == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Unique identifier, used to key the onward-transmission log.
    pub id: AgentId,
    /// Age in years, drawn from the empirical bracket distribution.
    pub age: u32,
    /// Nominal daily contact count (age-bracket parameter).
    pub daily_contacts: u32,
    /// Probability of death if infected (age-bracket parameter).
    pub prob_death: f64,
    /// Whether the agent is alive.
    pub alive: bool,
    /// Whether the agent is currently infected.
    pub infected: bool,
    /// Whether the agent has acquired permanent immunity.
    pub immune: bool,
    /// Whether the agent currently has detectable antibodies.
    ///
    /// May be `false` while `immune` is `true`: antibodies decay below
    /// the detection threshold while immunity persists.
    pub seropositive: bool,
    /// Whether this infection course is symptomatic (fixed at infection).
    pub symptomatic: bool,
    /// Whether the agent is quarantined (out of the contact pool).
    pub quarantined: bool,
    /// Whether this infection course ends in death (fixed at infection).
    pub dying: bool,
    /// Days elapsed since infection.
    pub days_infected: u32,
    /// Day index of infection. Used by the inference-mode stepper, which
    /// resolves infections by date rather than by elapsed-day counter.
    pub date_infected: Option<Day>,
}

impl Agent {
    /// Create an agent with age-stratified demographics.
    ///
    /// The age is drawn from the empirical distribution, the contact
    /// count and death probability come from the age bracket, and the
    /// agent starts immune with probability `config.starting_immunity`.
    pub fn stratified(config: &DiseaseConfig, rng: &mut impl Rng) -> Self {
        let age = demographics::generate_age(rng);
        let bracket = AgeBracket::for_age(age);
        let immune = rng.random::<f64>() < config.starting_immunity;
        Self {
            id: AgentId::new(),
            age,
            daily_contacts: bracket.daily_contacts(),
            prob_death: bracket.death_probability(),
            alive: true,
            infected: false,
            immune,
            seropositive: false,
            symptomatic: false,
            quarantined: false,
            dying: false,
            days_infected: 0,
            date_infected: None,
        }
    }

    /// Create a blank susceptible agent with no demographic parameters.
    ///
    /// Used by the inference-mode simulator, where infections are
    /// injected from an externally-inferred case series and fatality is
    /// decided by the fitted case fatality rate rather than by age.
    pub fn susceptible() -> Self {
        Self {
            id: AgentId::new(),
            age: 0,
            daily_contacts: 0,
            prob_death: 0.0,
            alive: true,
            infected: false,
            immune: false,
            seropositive: false,
            symptomatic: false,
            quarantined: false,
            dying: false,
            days_infected: 0,
            date_infected: None,
        }
    }

    /// Attempt to infect the agent (forward-mode transmission).
    ///
    /// No-op for immune, dead, or already-infected agents: immunity is
    /// absorbing, dead agents never re-enter the state machine, and the
    /// fatal/symptomatic draws must not be re-rolled mid-course.
    ///
    /// At infection time the agent draws once whether the case is fatal
    /// (with its age-dependent `prob_death`) and, for non-fatal cases,
    /// whether it is symptomatic (population-wide probability).
    pub fn infect(&mut self, config: &DiseaseConfig, rng: &mut impl Rng) {
        if self.immune || !self.alive || self.infected {
            return;
        }
        self.infected = true;
        self.days_infected = 0;
        if rng.random::<f64>() < self.prob_death {
            self.dying = true;
        } else if rng.random::<f64>() < config.probability_symptomatic {
            self.symptomatic = true;
        }
    }

    /// Mark the agent infected on the given day (inference mode).
    ///
    /// The inference stepper decides the outcome at resolution time from
    /// the fitted case fatality rate, so no per-agent draws happen here.
    /// No-op for immune, dead, or already-infected agents.
    pub fn expose(&mut self, day: Day) {
        if self.immune || !self.alive || self.infected {
            return;
        }
        self.infected = true;
        self.date_infected = Some(day);
    }

    /// Advance the agent's infection course by one day (forward mode).
    ///
    /// Returns the terminal outcome on the final day of the course, and
    /// `None` on every other day (including for healthy agents).
    pub fn advance_day(&mut self, config: &DiseaseConfig) -> Option<InfectionOutcome> {
        if !(self.infected && self.alive) {
            return None;
        }
        self.days_infected += 1;
        if self.days_infected == config.quarantine_onset_day && self.symptomatic {
            self.quarantined = true;
        }
        if self.days_infected == config.infection_length {
            let fatal = self.dying;
            self.resolve_infection(fatal);
            return Some(if fatal {
                InfectionOutcome::Died
            } else {
                InfectionOutcome::Recovered
            });
        }
        None
    }

    /// Apply the terminal transition of an infection course.
    ///
    /// Fatal: `alive` and `infected` clear (and quarantine with them).
    /// Survival: `infected` clears, `immune` and `seropositive` set,
    /// quarantine lifts. Exactly one of the two holds afterwards.
    pub const fn resolve_infection(&mut self, fatal: bool) {
        if fatal {
            self.alive = false;
            self.infected = false;
            self.symptomatic = false;
            self.quarantined = false;
        } else {
            self.infected = false;
            self.immune = true;
            self.seropositive = true;
            self.quarantined = false;
        }
    }

    /// Lose detectable antibodies. Immunity is unaffected.
    pub const fn wane_antibodies(&mut self) {
        self.seropositive = false;
    }

    /// Whether the agent is alive and outside quarantine, i.e. part of
    /// the daily contact pool.
    pub const fn is_circulating(&self) -> bool {
        self.alive && !self.quarantined
    }

    /// Whether the agent can be infected: living, not currently
    /// infected, and not immune.
    pub const fn is_candidate(&self) -> bool {
        self.alive && !self.infected && !self.immune
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn test_config() -> DiseaseConfig {
        DiseaseConfig::default()
    }

    #[test]
    fn immune_agent_never_infects() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut agent = Agent::susceptible();
        agent.immune = true;
        for _ in 0..50 {
            agent.infect(&config, &mut rng);
            assert!(!agent.infected);
        }
    }

    #[test]
    fn dead_agent_never_infects() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut agent = Agent::susceptible();
        agent.alive = false;
        agent.infect(&config, &mut rng);
        assert!(!agent.infected);
        agent.expose(10);
        assert!(!agent.infected);
    }

    #[test]
    fn fatal_draw_is_fixed_at_infection() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut agent = Agent::susceptible();
        agent.prob_death = 1.0;
        agent.infect(&config, &mut rng);
        assert!(agent.infected);
        assert!(agent.dying);
        // Re-invoking infect must not re-roll the outcome.
        agent.prob_death = 0.0;
        agent.infect(&config, &mut rng);
        assert!(agent.dying);
    }

    #[test]
    fn fatal_course_ends_dead_after_infection_length_days() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(4);
        let mut agent = Agent::susceptible();
        agent.prob_death = 1.0;
        agent.infect(&config, &mut rng);
        let mut outcome = None;
        for _ in 0..config.infection_length {
            outcome = agent.advance_day(&config);
        }
        assert_eq!(outcome, Some(InfectionOutcome::Died));
        assert!(!agent.alive);
        assert!(!agent.infected);
        assert!(!agent.immune);
        // Dead agents stop advancing.
        assert_eq!(agent.advance_day(&config), None);
    }

    #[test]
    fn surviving_course_ends_immune_and_seropositive() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut agent = Agent::susceptible();
        agent.prob_death = 0.0;
        agent.infect(&config, &mut rng);
        let mut outcome = None;
        for _ in 0..config.infection_length {
            outcome = agent.advance_day(&config);
        }
        assert_eq!(outcome, Some(InfectionOutcome::Recovered));
        assert!(agent.alive);
        assert!(!agent.infected);
        assert!(agent.immune);
        assert!(agent.seropositive);
        assert!(!agent.quarantined);
    }

    #[test]
    fn symptomatic_agent_quarantines_on_onset_day() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(6);
        let mut agent = Agent::susceptible();
        agent.prob_death = 0.0;
        agent.infect(&config, &mut rng);
        // Force the symptomatic flag regardless of the draw.
        agent.symptomatic = true;
        for day in 1..=config.quarantine_onset_day {
            let _ = agent.advance_day(&config);
            if day < config.quarantine_onset_day {
                assert!(!agent.quarantined, "quarantined early on day {day}");
            }
        }
        assert!(agent.quarantined);
        assert!(!agent.is_circulating());
    }

    #[test]
    fn asymptomatic_agent_never_quarantines() {
        let config = test_config();
        let mut agent = Agent::susceptible();
        agent.infected = true;
        agent.symptomatic = false;
        for _ in 0..config.infection_length - 1 {
            let _ = agent.advance_day(&config);
            assert!(!agent.quarantined);
        }
    }

    #[test]
    fn recovered_agent_is_absorbing() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut agent = Agent::susceptible();
        agent.resolve_infection(false);
        assert!(agent.immune);
        agent.infect(&config, &mut rng);
        assert!(!agent.infected);
        agent.expose(42);
        assert!(!agent.infected);
    }

    #[test]
    fn waning_clears_seropositive_but_not_immune() {
        let mut agent = Agent::susceptible();
        agent.resolve_infection(false);
        assert!(agent.seropositive);
        agent.wane_antibodies();
        assert!(!agent.seropositive);
        assert!(agent.immune);
    }

    #[test]
    fn expose_records_infection_date() {
        let mut agent = Agent::susceptible();
        agent.expose(91);
        assert!(agent.infected);
        assert_eq!(agent.date_infected, Some(91));
    }

    #[test]
    fn stratified_agent_parameters_match_bracket() {
        let config = test_config();
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..100 {
            let agent = Agent::stratified(&config, &mut rng);
            let bracket = AgeBracket::for_age(agent.age);
            assert_eq!(agent.daily_contacts, bracket.daily_contacts());
            assert!((agent.prob_death - bracket.death_probability()).abs() < 1e-15);
            assert!(agent.alive);
            assert!(!agent.infected);
        }
    }

    #[test]
    fn full_starting_immunity_marks_everyone_immune() {
        let config = DiseaseConfig {
            starting_immunity: 1.0,
            ..DiseaseConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..20 {
            let agent = Agent::stratified(&config, &mut rng);
            assert!(agent.immune);
        }
    }
}
