//! Shared type definitions for the serosim epidemic simulator.
//!
//! This crate is the single source of truth for the types used across the
//! serosim workspace: strongly-typed identifiers, day-indexed time series,
//! and the per-day output records produced by the forward simulator.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for agent identifiers
//! - [`series`] -- Day-indexed series aliases for case, death, and
//!   seroprevalence data
//! - [`records`] -- Per-day aggregate records emitted by the forward
//!   simulation

pub mod ids;
pub mod records;
pub mod series;

// Re-export all public types at crate root for convenience.
pub use ids::AgentId;
pub use records::DayRecord;
pub use series::{CaseSeries, CountSeries, Day, RateSeries};
