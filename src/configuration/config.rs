//! Configuration types for loading relaxation scenarios from YAML.
//!
//! A thin, `serde`-deserializable representation of a run:
//!
//! - [`EngineConfig`]     – force summation strategy and progress reporting
//! - [`ParametersConfig`] – point count, step knobs, tolerance, cap and seed
//! - [`ScenarioConfig`]   – top-level wrapper loaded from a file
//!
//! # YAML format
//!
//! ```yaml
//! engine:                   # optional
//!   parallel: false         # rayon force summation
//!   report_interval: 2500   # iterations between progress logs, 0 = off
//!
//! parameters:
//!   n: 13                   # number of points
//!   tolerance: 1.0e-2       # max per-point displacement for convergence
//!   relaxation_factor: 1.0  # optional, default 1.0
//!   drag_factor: 0.1        # optional, default 0.1
//!   max_iterations: 1000000 # optional, default 1_000_000
//!   seed: 42                # optional, OS entropy when missing
//! ```
//!
//! [`crate::Scenario`] validates this and turns it into a runnable simulation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::engine::DEFAULT_REPORT_INTERVAL;
use crate::simulation::params::{DEFAULT_DRAG, DEFAULT_MAX_ITERATIONS, DEFAULT_RELAXATION};

/// How the engine evaluates forces and reports progress
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub parallel: bool,       // `true` - sum forces per point on the rayon pool
    pub report_interval: u64, // log progress every this many iterations, 0 disables
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

/// Numerical parameters for a run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub n: usize,       // number of points on the sphere
    pub tolerance: f64, // convergence threshold on per-point displacement
    #[serde(default = "default_relaxation")]
    pub relaxation_factor: f64, // scales each velocity increment
    #[serde(default = "default_drag")]
    pub drag_factor: f64, // fraction of acceleration kept as velocity increment
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64, // safety cap
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

fn default_relaxation() -> f64 {
    DEFAULT_RELAXATION
}

fn default_drag() -> f64 {
    DEFAULT_DRAG
}

fn default_max_iterations() -> u64 {
    DEFAULT_MAX_ITERATIONS
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // summation and reporting options
    pub parameters: ParametersConfig, // run parameters
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg = serde_yaml::from_reader(reader)?;
        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }
}
