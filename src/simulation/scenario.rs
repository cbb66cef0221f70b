//! Build runnable relaxations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a validated
//! `Scenario` bundle:
//! - engine settings (`Engine`)
//! - run parameters (`Parameters`)
//! - the seed for the starting configuration, if any
//!
//! Validation happens here, before any point is created.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::solver::Simulation;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub seed: Option<u64>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            n: p_cfg.n,
            relaxation_factor: p_cfg.relaxation_factor,
            drag_factor: p_cfg.drag_factor,
            tolerance: p_cfg.tolerance,
            max_iterations: p_cfg.max_iterations,
        };
        parameters.validate()?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
            report_interval: cfg.engine.report_interval,
        };

        Ok(Self {
            engine,
            parameters,
            seed: p_cfg.seed,
        })
    }

    /// Random generator for the starting positions, seeded when a seed was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Scatter the points and return the simulation ready to step
    pub fn into_simulation(self) -> Result<Simulation> {
        let mut rng = self.rng();
        Simulation::new(self.parameters, self.engine, &mut rng)
    }
}
