//! The relaxation loop
//!
//! [`Simulation`] owns everything a run needs: the point set, the parameters,
//! the force law and the scratch buffers. Each [`Simulation::step`] runs one
//! force evaluation, one integration step and one convergence check, in that
//! order. [`Simulation::run`] repeats steps until the points settle or the
//! iteration cap is hit, and hands back a [`Solution`].

use log::{debug, info, warn};
use rand::Rng;

use crate::error::{Result, ThomsonError};
use crate::simulation::analysis::{min_pairwise_distance, potential_energy};
use crate::simulation::convergence::ConvergenceMonitor;
use crate::simulation::engine::Engine;
use crate::simulation::forces::CoulombRepulsion;
use crate::simulation::init::random_point_set;
use crate::simulation::integrator::relaxation_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, PointSet};

/// Outcome of a single iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub iteration: u64,        // 1-based count of completed iterations
    pub max_displacement: f64, // largest |new - old| this step
    pub converged: bool,
}

/// Final state of a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub positions: Vec<NVec3>,
    pub converged: bool, // false when the iteration cap ended the run
    pub iterations: u64,
    pub max_displacement: f64,
    pub energy: f64,
    pub min_distance: f64,
}

pub struct Simulation {
    pub engine: Engine,
    pub parameters: Parameters,
    points: PointSet,
    pub forces: CoulombRepulsion,
    monitor: ConvergenceMonitor,
    iteration: u64,
    accels: Vec<NVec3>,
    old: Vec<NVec3>,
    new: Vec<NVec3>,
}

impl Simulation {
    /// Validate `parameters` and scatter `parameters.n` points using `rng`
    pub fn new<R: Rng>(parameters: Parameters, engine: Engine, rng: &mut R) -> Result<Self> {
        parameters.validate()?;
        let points = random_point_set(parameters.n, rng)?;
        Self::from_points(parameters, engine, points)
    }

    /// Start from an existing point set. `parameters.n` must match its size.
    pub fn from_points(parameters: Parameters, engine: Engine, points: PointSet) -> Result<Self> {
        parameters.validate()?;
        if parameters.n != points.len() {
            return Err(ThomsonError::invalid(format!(
                "parameters.n is {} but {} points were given",
                parameters.n,
                points.len()
            )));
        }

        let n = points.len();
        Ok(Self {
            monitor: ConvergenceMonitor::new(parameters.tolerance),
            engine,
            parameters,
            points,
            forces: CoulombRepulsion::default(),
            iteration: 0,
            accels: vec![NVec3::zeros(); n],
            old: Vec::with_capacity(n),
            new: Vec::with_capacity(n),
        })
    }

    /// Current points; only `step` moves them
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Completed iterations so far
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Accelerations computed by the last step
    pub fn accelerations(&self) -> &[NVec3] {
        &self.accels
    }

    /// Positions before and after the last step's drift
    pub fn last_displacement(&self) -> (&[NVec3], &[NVec3]) {
        (&self.old, &self.new)
    }

    /// One synchronous iteration: forces, integration, convergence check
    pub fn step(&mut self) -> StepReport {
        // every force reads the positions as they stood at the end of the last step
        if self.engine.parallel {
            self.forces.accumulate_accels_par(&self.points, &mut self.accels);
        } else {
            self.forces.accumulate_accels(&self.points, &mut self.accels);
        }

        relaxation_step(
            &mut self.points,
            &self.accels,
            &self.parameters,
            &mut self.old,
            &mut self.new,
        );

        self.iteration += 1;
        StepReport {
            iteration: self.iteration,
            max_displacement: ConvergenceMonitor::max_displacement(&self.old, &self.new),
            converged: self.monitor.is_converged(&self.old, &self.new),
        }
    }

    /// Step until converged or `max_iterations` is reached
    pub fn run(mut self) -> Solution {
        info!(
            "relaxing {} points (tolerance {:e}, drag {}, relaxation {}, cap {})",
            self.points.len(),
            self.parameters.tolerance,
            self.parameters.drag_factor,
            self.parameters.relaxation_factor,
            self.parameters.max_iterations,
        );

        let mut last = StepReport {
            iteration: self.iteration,
            max_displacement: f64::INFINITY,
            converged: false,
        };

        while self.iteration < self.parameters.max_iterations {
            last = self.step();
            if last.converged {
                break;
            }
            self.report_progress(&last);
        }

        let positions = self.points.positions();
        let energy = potential_energy(&positions);
        let min_distance = min_pairwise_distance(&positions);

        if last.converged {
            info!(
                "converged after {} iterations, energy {:.6}, min distance {:.6}",
                last.iteration, energy, min_distance
            );
        } else {
            warn!(
                "stopped at the iteration cap ({}) without converging, last max displacement {:e}",
                self.iteration, last.max_displacement
            );
        }

        Solution {
            positions,
            converged: last.converged,
            iterations: self.iteration,
            max_displacement: last.max_displacement,
            energy,
            min_distance,
        }
    }

    fn report_progress(&self, report: &StepReport) {
        let every = self.engine.report_interval;
        if every == 0 || report.iteration % every != 0 {
            return;
        }

        info!(
            "iteration {}: max displacement {:e}, energy {:.6}",
            report.iteration,
            report.max_displacement,
            potential_energy(&self.new),
        );

        if log::log_enabled!(log::Level::Debug) {
            let displacements: Vec<f64> = self
                .old
                .iter()
                .zip(self.new.iter())
                .map(|(o, n)| (n - o).norm())
                .collect();
            debug!("displacements: {:?}", displacements);
        }
    }
}

/// Convenience wrapper: build a seeded-or-not simulation and run it to completion
pub fn solve<R: Rng>(parameters: Parameters, engine: Engine, rng: &mut R) -> Result<Solution> {
    Ok(Simulation::new(parameters, engine, rng)?.run())
}
