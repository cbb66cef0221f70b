pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, ThomsonError};

pub use simulation::states::{Point, PointSet, NVec3};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::init::{random_point_set, random_unit_vector};
pub use simulation::forces::CoulombRepulsion;
pub use simulation::integrator::{relaxation_step, project_tangential};
pub use simulation::convergence::ConvergenceMonitor;
pub use simulation::analysis::{potential_energy, min_pairwise_distance, max_norm_error};
pub use simulation::solver::{Simulation, Solution, StepReport, solve};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_forces, bench_steps, bench_step_curve};
