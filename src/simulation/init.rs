//! Random starting configurations
//!
//! Positions are drawn in the cube [-1, 1]^3 and kept only if they fall inside
//! the unit ball (and away from the origin), then normalized. Directions of
//! ball samples are uniform on the sphere.

use rand::Rng;

use crate::error::{Result, ThomsonError};
use crate::simulation::states::{NVec3, Point, PointSet};

/// Samples shorter than this are redrawn instead of normalized
pub const MIN_SAMPLE_NORM: f64 = 1.0e-6;

/// Draw one uniformly distributed unit vector
pub fn random_unit_vector<R: Rng>(rng: &mut R) -> NVec3 {
    loop {
        let sample = NVec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let norm = sample.norm();

        // too short to normalize safely, or outside the ball
        if norm < MIN_SAMPLE_NORM || norm > 1.0 {
            continue;
        }
        return sample / norm;
    }
}

/// Create `n` points at rest with independent uniform positions
pub fn random_point_set<R: Rng>(n: usize, rng: &mut R) -> Result<PointSet> {
    if n < 2 {
        return Err(ThomsonError::invalid(format!(
            "n must be at least 2, got {n}"
        )));
    }

    let points = (0..n)
        .map(|_| Point::at_rest(random_unit_vector(rng)))
        .collect();

    Ok(PointSet { points })
}
