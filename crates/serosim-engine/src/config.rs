//! Engine configuration, loaded from a YAML file at startup.
//!
//! One file selects the mode and bundles the per-mode sections. All
//! tunables have defaults, so a minimal configuration is just
//! `mode: forward`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serosim_agents::DiseaseConfig;
use serosim_inference::{FitParams, GridSpec, InferenceConfig};

use crate::error::EngineError;

/// Which simulation the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Forward outbreak simulation over a synthetic population.
    Forward,
    /// 1-D grid search over the case fatality rate (half-life fixed).
    FitCfr,
    /// 2-D grid search over antibody half-life and case fatality rate.
    FitJoint,
}

/// Complete engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The mode to run.
    pub mode: Mode,

    /// Seed for the random generator. When absent, the generator is
    /// seeded from the operating system and runs are not reproducible.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Forward-mode settings.
    #[serde(default)]
    pub forward: ForwardSection,

    /// Inference-mode settings.
    #[serde(default)]
    pub inference: InferenceSection,
}

impl EngineConfig {
    /// Load the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&text)?)
    }
}

/// Forward-mode settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardSection {
    /// Size of the synthetic population.
    pub population: usize,
    /// Number of simulated days.
    pub days: u32,
    /// Number of agents infected on day 0 to start the outbreak.
    pub initial_infections: usize,
    /// Disease course and transmission tunables.
    pub disease: DiseaseConfig,
    /// Optional path for the per-day output CSV.
    pub output: Option<PathBuf>,
}

impl Default for ForwardSection {
    fn default() -> Self {
        Self {
            population: 100_000,
            days: 300,
            initial_infections: 1,
            disease: DiseaseConfig::default(),
            output: None,
        }
    }
}

/// Inference-mode settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceSection {
    /// Sample population size, death lag, and assay characteristics.
    pub simulation: InferenceConfig,
    /// Parameters for the baseline evaluation logged before the sweep,
    /// and the fixed half-life for the 1-D CFR sweep.
    pub baseline: FitParams,
    /// Grid over the case fatality rate.
    pub cfr_grid: GridSpec,
    /// Grid over the antibody half-life (2-D mode only).
    pub halflife_grid: GridSpec,
    /// Path to the cumulative deaths table (`date,deaths`).
    pub deaths: PathBuf,
    /// Path to the serology table (`date,sero` in percent).
    pub serology: PathBuf,
    /// True population the death counts cover; daily counts are scaled
    /// by `sample_population / total_population`.
    pub total_population: f64,
}

impl Default for InferenceSection {
    fn default() -> Self {
        Self {
            simulation: InferenceConfig::default(),
            baseline: FitParams {
                ab_halflife: 90.0,
                cfr: 0.0055,
            },
            cfr_grid: GridSpec::new(0.001, 0.01, 0.0005),
            halflife_grid: GridSpec::new(30.0, 180.0, 10.0),
            deaths: PathBuf::from("data/deaths.csv"),
            serology: PathBuf::from("data/serology.csv"),
            total_population: 21_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let parsed: Result<EngineConfig, _> = serde_yml::from_str("mode: forward\n");
        assert!(parsed.is_ok());
        if let Ok(config) = parsed {
            assert_eq!(config.mode, Mode::Forward);
            assert_eq!(config.seed, None);
            assert_eq!(config.forward.population, 100_000);
            assert_eq!(config.forward.days, 300);
        }
    }

    #[test]
    fn nested_sections_override_defaults() {
        let yaml = "\
mode: fit-cfr
seed: 42
inference:
  cfr_grid:
    low: 0.002
    high: 0.02
    step: 0.001
  total_population: 5000000
";
        let parsed: Result<EngineConfig, _> = serde_yml::from_str(yaml);
        assert!(parsed.is_ok());
        if let Ok(config) = parsed {
            assert_eq!(config.mode, Mode::FitCfr);
            assert_eq!(config.seed, Some(42));
            assert!((config.inference.cfr_grid.low - 0.002).abs() < 1e-12);
            assert!((config.inference.total_population - 5_000_000.0).abs() < 1e-6);
            // Untouched fields keep their defaults.
            assert!((config.inference.baseline.ab_halflife - 90.0).abs() < 1e-12);
        }
    }

    #[test]
    fn mode_names_are_kebab_case() {
        let forward: Result<Mode, _> = serde_yml::from_str("forward");
        let joint: Result<Mode, _> = serde_yml::from_str("fit-joint");
        assert_eq!(forward.ok(), Some(Mode::Forward));
        assert_eq!(joint.ok(), Some(Mode::FitJoint));
    }
}
