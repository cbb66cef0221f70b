//! Numerical parameters for a relaxation run
//!
//! `Parameters` holds the run settings:
//! - point count `n`,
//! - the two step knobs, `relaxation_factor` and `drag_factor`,
//! - convergence `tolerance` and the `max_iterations` cap
//!
//! The two knobs multiply each other, so their stable ranges are coupled.
//! drag = 0.1 with relaxation = 1.0 is the known-good pair.

use crate::error::{Result, ThomsonError};

pub const DEFAULT_RELAXATION: f64 = 1.0;
pub const DEFAULT_DRAG: f64 = 0.1;
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub n: usize,               // number of points
    pub relaxation_factor: f64, // scales the velocity increment
    pub drag_factor: f64,       // fraction of acceleration kept per step
    pub tolerance: f64,         // max per-point displacement for convergence
    pub max_iterations: u64,    // safety cap
}

impl Parameters {
    /// Parameters with the default knobs and iteration cap
    pub fn new(n: usize, tolerance: f64) -> Self {
        Self {
            n,
            relaxation_factor: DEFAULT_RELAXATION,
            drag_factor: DEFAULT_DRAG,
            tolerance,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Reject configurations the loop can't run on
    pub fn validate(&self) -> Result<()> {
        if self.n < 2 {
            return Err(ThomsonError::invalid(format!(
                "n must be at least 2, got {}",
                self.n
            )));
        }
        if !self.relaxation_factor.is_finite() || self.relaxation_factor <= 0.0 {
            return Err(ThomsonError::invalid(format!(
                "relaxation_factor must be positive, got {}",
                self.relaxation_factor
            )));
        }
        if !self.drag_factor.is_finite() || self.drag_factor <= 0.0 || self.drag_factor > 1.0 {
            return Err(ThomsonError::invalid(format!(
                "drag_factor must be in (0, 1], got {}",
                self.drag_factor
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ThomsonError::invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ThomsonError::invalid("max_iterations must be positive"));
        }
        Ok(())
    }

    /// Combined multiplier turning a raw acceleration into a velocity increment
    pub fn step_gain(&self) -> f64 {
        // a - a * (1 - drag), kept in this form so drag stays the retained fraction
        (1.0 - (1.0 - self.drag_factor)) * self.relaxation_factor
    }
}
