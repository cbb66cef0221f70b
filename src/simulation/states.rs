//! Core state types for the sphere relaxation.
//!
//! - `Point`    one charge constrained to the unit sphere
//! - `PointSet` the ordered, fixed-size collection a run works on
//!
//! Positions are kept at unit length after every update; velocities are
//! projected onto the tangent plane before every position update.

use nalgebra::Vector3;

use crate::error::{Result, ThomsonError};

pub type NVec3 = Vector3<f64>;

/// Magnitudes below this are treated as the zero vector
pub const ZERO_EPS: f64 = 1.0e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: NVec3, // position, unit length
    pub v: NVec3, // velocity, tangent after projection
    pub q: f64,   // charge
}

impl Point {
    /// Point at rest with unit charge. `x` must already be unit length.
    pub fn at_rest(x: NVec3) -> Self {
        Self {
            x,
            v: NVec3::zeros(),
            q: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub points: Vec<Point>,
}

impl PointSet {
    /// Build a set from arbitrary non-zero vectors, normalizing each onto the sphere
    pub fn from_positions(positions: &[NVec3]) -> Result<Self> {
        if positions.len() < 2 {
            return Err(ThomsonError::invalid(format!(
                "need at least 2 points, got {}",
                positions.len()
            )));
        }

        let mut points = Vec::with_capacity(positions.len());
        for (i, p) in positions.iter().enumerate() {
            let norm = p.norm();
            if !norm.is_finite() || norm < ZERO_EPS {
                return Err(ThomsonError::invalid(format!(
                    "starting position {i} cannot be projected onto the sphere: {p:?}"
                )));
            }
            points.push(Point::at_rest(p / norm));
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Snapshot of every position, index-aligned with `points`
    pub fn positions(&self) -> Vec<NVec3> {
        self.points.iter().map(|p| p.x).collect()
    }
}
