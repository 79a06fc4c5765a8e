//! Per-day aggregate records emitted by the forward simulation.

use serde::{Deserialize, Serialize};

use crate::series::Day;

/// Aggregate statistics for one simulated day of the forward outbreak.
///
/// One record is produced per day, in order, by the simulation runner.
/// The engine binary serializes these directly to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Simulation day index, starting at 0.
    pub day: Day,

    /// Number of currently infected agents at the start of the day.
    pub infected: u64,

    /// Fraction of living agents that are immune.
    pub immune_fraction: f64,

    /// Cumulative deaths since the start of the simulation.
    pub deaths: u64,

    /// Mean onward transmissions per infected circulating agent.
    ///
    /// `NaN` when no infected circulating agents exist that day. The value
    /// is data ("no observation"), not an error; consumers must not assume
    /// it is finite.
    pub r_effective: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_to_flat_json() {
        let record = DayRecord {
            day: 3,
            infected: 120,
            immune_fraction: 0.05,
            deaths: 2,
            r_effective: 1.4,
        };
        let json = serde_json::to_string(&record).unwrap_or_default();
        assert!(json.contains("\"day\":3"));
        assert!(json.contains("\"infected\":120"));
    }

    #[test]
    fn nan_reproduction_number_survives_copy() {
        let record = DayRecord {
            day: 0,
            infected: 0,
            immune_fraction: 0.0,
            deaths: 0,
            r_effective: f64::NAN,
        };
        let copy = record;
        assert!(copy.r_effective.is_nan());
    }
}
