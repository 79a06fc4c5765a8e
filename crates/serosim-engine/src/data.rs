//! Loading of the observed death and serology tables.
//!
//! Both tables are CSVs keyed by calendar date (`%m/%d/%y`). Dates are
//! collapsed to day-of-year indices, so all observations are assumed to
//! fall within a single calendar year. Deaths arrive as cumulative
//! counts over the whole reporting population and are differenced and
//! rescaled to the sample population; serology arrives as percentages
//! and is converted to fractions.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serosim_types::{CountSeries, Day, RateSeries};
use tracing::info;

use crate::error::EngineError;

const DATE_FORMAT: &str = "%m/%d/%y";

#[derive(Debug, Deserialize)]
struct DeathRow {
    date: String,
    deaths: f64,
}

#[derive(Debug, Deserialize)]
struct SerologyRow {
    date: String,
    sero: f64,
}

fn day_of_year(date: &str) -> Result<Day, EngineError> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)?;
    Ok(parsed.ordinal())
}

/// Difference a date-ordered cumulative series into daily counts and
/// rescale each count by `scale`.
///
/// The first row's count is taken as-is (cumulative from zero). Negative
/// dailies from reporting corrections are passed through unchanged;
/// downstream consumers decide how to treat them.
pub fn daily_from_cumulative(cumulative: &[(Day, f64)], scale: f64) -> CountSeries {
    let mut series = CountSeries::new();
    let mut previous = 0.0;
    for &(day, total) in cumulative {
        series.insert(day, (total - previous) * scale);
        previous = total;
    }
    series
}

/// Load a cumulative death table and return the rescaled daily series.
///
/// `scale` is the ratio of the simulated sample population to the true
/// population the counts cover.
pub fn load_deaths(path: &Path, scale: f64) -> Result<CountSeries, EngineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut cumulative = Vec::new();
    for row in reader.deserialize() {
        let row: DeathRow = row?;
        cumulative.push((day_of_year(&row.date)?, row.deaths));
    }
    if cumulative.is_empty() {
        return Err(EngineError::EmptyTable { what: "deaths" });
    }
    info!(rows = cumulative.len(), path = %path.display(), "loaded death table");
    Ok(daily_from_cumulative(&cumulative, scale))
}

/// Load a serology table of percent-seropositive observations, returning
/// fractions keyed by day of year.
pub fn load_serology(path: &Path) -> Result<RateSeries, EngineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut series = RateSeries::new();
    for row in reader.deserialize() {
        let row: SerologyRow = row?;
        series.insert(day_of_year(&row.date)?, row.sero / 100.0);
    }
    if series.is_empty() {
        return Err(EngineError::EmptyTable { what: "serology" });
    }
    info!(rows = series.len(), path = %path.display(), "loaded serology table");
    Ok(series)
}
