//! Day-indexed time series shared by the forward and inference simulators.
//!
//! All external data reaches the core as a mapping from an integer day
//! index to a numeric value. Day indices are day-of-year ordinals when the
//! data comes from calendar-dated tables, or plain simulation days when it
//! comes from the forward runner. `BTreeMap` keeps iteration chronological
//! as long as day indices ascend, which the back-dating computation in the
//! inference crate relies on.

use std::collections::BTreeMap;

/// A single day index (day-of-year ordinal or simulation day).
pub type Day = u32;

/// Daily death counts. Values are `f64` because counts derived from
/// cumulative tables are rescaled to the sample population and may be
/// fractional (or, after differencing noisy data, negative).
pub type CountSeries = BTreeMap<Day, f64>;

/// Daily inferred new-infection counts. Signed: differencing cumulative
/// death data can produce negative dailies, which the inference stepper
/// skips rather than rejects.
pub type CaseSeries = BTreeMap<Day, i64>;

/// Daily fractions in `[0, 1]`, such as observed or simulated
/// seroprevalence.
pub type RateSeries = BTreeMap<Day, f64>;
