//! Scalar summaries of a configuration
//!
//! Used for progress logs, the final report, and checking results.

use super::forces::MIN_SEPARATION2;
use super::states::NVec3;

/// Total pairwise potential, sum of 1 / |p_i - p_j| over distinct pairs.
/// Coincident pairs are left out.
pub fn potential_energy(positions: &[NVec3]) -> f64 {
    let n = positions.len();
    let mut energy = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r2 = (positions[i] - positions[j]).norm_squared();
            if r2 < MIN_SEPARATION2 {
                continue;
            }
            energy += r2.sqrt().recip();
        }
    }
    energy
}

/// Smallest distance between two distinct points, `f64::INFINITY` for fewer than two
pub fn min_pairwise_distance(positions: &[NVec3]) -> f64 {
    let n = positions.len();
    let mut min_d2 = f64::INFINITY;
    for i in 0..n {
        for j in (i + 1)..n {
            min_d2 = min_d2.min((positions[i] - positions[j]).norm_squared());
        }
    }
    min_d2.sqrt()
}

/// Largest deviation of any position from unit length
pub fn max_norm_error(positions: &[NVec3]) -> f64 {
    positions
        .iter()
        .map(|p| (p.norm() - 1.0).abs())
        .fold(0.0, f64::max)
}
