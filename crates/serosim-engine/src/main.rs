//! Command-line entry point for the serosim simulator.
//!
//! Reads a YAML configuration (path given as the first argument,
//! defaulting to `serosim-config.yaml`) and dispatches on its mode:
//!
//! - `forward` -- run an outbreak over a synthetic age-stratified
//!   population and optionally write the per-day aggregates as CSV
//! - `fit-cfr` -- load observed death and serology tables and sweep the
//!   case fatality rate over a grid with the antibody half-life fixed
//! - `fit-joint` -- sweep half-life and case fatality rate jointly

mod config;
mod data;
mod error;

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serosim_core::{Population, run_outbreak};
use serosim_inference::{FitParams, grid_search, grid_search_2d, simulate};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, ForwardSection, InferenceSection, Mode};
use crate::error::EngineError;

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("serosim-config.yaml"), PathBuf::from);
    let config = EngineConfig::load(&config_path)?;
    info!(path = %config_path.display(), mode = ?config.mode, "configuration loaded");

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "seeding random generator");
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_os_rng(),
    };

    match config.mode {
        Mode::Forward => run_forward(&config.forward, &mut rng),
        Mode::FitCfr => run_fit_cfr(&config.inference, &mut rng),
        Mode::FitJoint => run_fit_joint(&config.inference, &mut rng),
    }
}

/// Run the forward outbreak simulation and report final seroprevalence,
/// overall and for the 65+ bracket.
fn run_forward(section: &ForwardSection, rng: &mut impl Rng) -> Result<(), EngineError> {
    let mut population = Population::stratified(section.population, &section.disease, rng);
    let records = run_outbreak(
        &mut population,
        section.days,
        section.initial_infections,
        &section.disease,
        rng,
    );

    if let Some(path) = &section.output {
        let mut writer = csv::Writer::from_path(path)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = records.len(), "day records written");
    }

    let elderly: Vec<_> = population
        .agents()
        .iter()
        .filter(|agent| agent.alive && agent.age >= 65)
        .collect();
    let elderly_seropositive = elderly.iter().filter(|agent| agent.seropositive).count();
    let elderly_seroprevalence = if elderly.is_empty() {
        0.0
    } else {
        elderly_seropositive as f64 / elderly.len() as f64
    };

    info!(
        seroprevalence = population.seroprevalence(),
        elderly_seroprevalence,
        total_deaths = population.cumulative_deaths(),
        "outbreak summary"
    );
    Ok(())
}

/// Load the observed tables and evaluate the baseline parameters once,
/// logging the error so sweeps have a reference point.
fn evaluate_baseline(
    section: &InferenceSection,
    deaths: &serosim_types::CountSeries,
    serology: &serosim_types::RateSeries,
    rng: &mut impl Rng,
) -> Result<(), EngineError> {
    let error = simulate(section.baseline, deaths, serology, &section.simulation, rng)?;
    info!(
        ab_halflife = section.baseline.ab_halflife,
        cfr = section.baseline.cfr,
        error,
        "baseline objective evaluated"
    );
    Ok(())
}

fn load_observations(
    section: &InferenceSection,
) -> Result<(serosim_types::CountSeries, serosim_types::RateSeries), EngineError> {
    let scale = section.simulation.sample_population as f64 / section.total_population;
    let deaths = data::load_deaths(&section.deaths, scale)?;
    let serology = data::load_serology(&section.serology)?;
    Ok((deaths, serology))
}

/// Sweep the case fatality rate with the half-life fixed at the
/// baseline value.
fn run_fit_cfr(section: &InferenceSection, rng: &mut impl Rng) -> Result<(), EngineError> {
    let (deaths, serology) = load_observations(section)?;
    evaluate_baseline(section, &deaths, &serology, rng)?;

    let halflife = section.baseline.ab_halflife;
    let fit = grid_search(&section.cfr_grid, |cfr| {
        simulate(
            FitParams {
                ab_halflife: halflife,
                cfr,
            },
            &deaths,
            &serology,
            &section.simulation,
            rng,
        )
    })
    .ok_or(EngineError::NoFeasibleFit)?;

    info!(
        cfr = fit.value,
        ab_halflife = halflife,
        error = fit.error,
        "case fatality rate fitted"
    );
    Ok(())
}

/// Sweep antibody half-life and case fatality rate jointly.
fn run_fit_joint(section: &InferenceSection, rng: &mut impl Rng) -> Result<(), EngineError> {
    let (deaths, serology) = load_observations(section)?;
    evaluate_baseline(section, &deaths, &serology, rng)?;

    let fit = grid_search_2d(&section.halflife_grid, &section.cfr_grid, |halflife, cfr| {
        simulate(
            FitParams {
                ab_halflife: halflife,
                cfr,
            },
            &deaths,
            &serology,
            &section.simulation,
            rng,
        )
    })
    .ok_or(EngineError::NoFeasibleFit)?;

    info!(
        ab_halflife = fit.first,
        cfr = fit.second,
        error = fit.error,
        "half-life and case fatality rate fitted"
    );
    Ok(())
}
