//! Population container and forward outbreak simulation for serosim.
//!
//! This crate holds the population-level pieces of the simulator:
//!
//! - [`population`] -- the fixed-size agent collection with the filtered
//!   views (living, infected, circulating, candidates) both simulators
//!   read every day
//! - [`transmission`] -- the forward-mode contact model: lockdown
//!   damping, uniform contact sampling, per-contact transmission draws,
//!   and the daily effective reproduction number
//! - [`tick`] -- one simulated day: record aggregates, run the contact
//!   round, advance every agent
//! - [`runner`] -- the bounded forward simulation loop producing one
//!   [`DayRecord`](serosim_types::DayRecord) per day

pub mod population;
pub mod runner;
pub mod tick;
pub mod transmission;

pub use population::Population;
pub use runner::run_outbreak;
pub use tick::run_day;
