//! Agent state machine and age-stratified demographics for serosim.
//!
//! This crate defines the per-individual finite-state machine shared by
//! the forward simulator and the inference engine:
//!
//! - [`config`] -- the [`DiseaseConfig`] struct bundling every tunable
//!   (durations, rates, probabilities); no global mutable state
//! - [`demographics`] -- empirical age sampling and the age-bracket
//!   lookup tables for daily contacts and death probability
//! - [`agent`] -- the [`Agent`] record and its state transitions
//!   (infection, quarantine onset, death/recovery, antibody waning)
//!
//! All randomness is drawn from an explicitly injected [`rand::Rng`]
//! handle so that tests can fix seeds and assert exact outcomes.

pub mod agent;
pub mod config;
pub mod demographics;

pub use agent::{Agent, InfectionOutcome};
pub use config::DiseaseConfig;
pub use demographics::AgeBracket;
