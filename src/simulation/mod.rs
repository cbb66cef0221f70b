pub mod states;
pub mod params;
pub mod engine;
pub mod init;
pub mod forces;
pub mod integrator;
pub mod convergence;
pub mod analysis;
pub mod solver;
pub mod scenario;
