//! Pairwise repulsion between the points of a `PointSet`
//!
//! Coulomb-like inverse-square law. The overall magnitude (k and the charges)
//! only rescales the forces and leaves the minimum-energy configuration alone,
//! so k = 1 and unit charges are the defaults.
//!
//! Two summation strategies with the same physics:
//! - [`CoulombRepulsion::accumulate_accels`] walks unordered pairs once and
//!   applies each contribution equal and opposite
//! - [`CoulombRepulsion::accumulate_accels_par`] sums every point independently
//!   with rayon, reading a snapshot that nothing mutates meanwhile

use rayon::prelude::*;

use crate::simulation::states::{NVec3, PointSet};

/// Squared separations below this are treated as coincident points and skipped
pub const MIN_SEPARATION2: f64 = 1.0e-24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombRepulsion {
    pub k: f64, // force constant
}

impl Default for CoulombRepulsion {
    fn default() -> Self {
        Self { k: 1.0 }
    }
}

impl CoulombRepulsion {
    /// Acceleration on a point at `xi` (charge `qi`) caused by one at `xj` (charge `qj`).
    /// `None` when the two coincide and the direction is undefined.
    #[inline]
    pub fn pair_accel(&self, xi: NVec3, qi: f64, xj: NVec3, qj: f64) -> Option<NVec3> {
        // r points from j to i, so +r pushes i away from j
        let r = xi - xj;
        let r2 = r.dot(&r);
        if r2 < MIN_SEPARATION2 {
            return None;
        }

        // k qi qj / |r|^2 along r / |r|  =>  k qi qj r / |r|^3
        let inv_r = r2.sqrt().recip();
        let coef = self.k * qi * qj * inv_r * inv_r * inv_r;
        Some(coef * r)
    }

    /// Sequential O(N^2) sum. `out[i]` is overwritten with the total
    /// acceleration on point i.
    pub fn accumulate_accels(&self, set: &PointSet, out: &mut [NVec3]) {
        debug_assert_eq!(set.len(), out.len());

        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }

        let n = set.len();
        for i in 0..n {
            let pi = &set.points[i];

            for j in (i + 1)..n {
                let pj = &set.points[j];

                let Some(a) = self.pair_accel(pi.x, pi.q, pj.x, pj.q) else {
                    continue;
                };

                // i is pushed along +r, j along -r
                out[i] += a;
                out[j] -= a;
            }
        }
    }

    /// Parallel O(N^2) sum, one independent reduction per point
    pub fn accumulate_accels_par(&self, set: &PointSet, out: &mut [NVec3]) {
        debug_assert_eq!(set.len(), out.len());

        let points = &set.points;
        out.par_iter_mut().enumerate().for_each(|(i, a)| {
            let pi = &points[i];
            *a = points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .filter_map(|(_, pj)| self.pair_accel(pi.x, pi.q, pj.x, pj.q))
                .fold(NVec3::zeros(), |acc, c| acc + c);
        });
    }
}
