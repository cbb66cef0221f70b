//! Damped first-order relaxation step on the unit sphere
//!
//! One call advances every point once:
//! kick (velocity += drag * relaxation * a), tangential projection,
//! drift (x += v, unit step), then renormalization onto the sphere.

use super::params::Parameters;
use super::states::{NVec3, PointSet};

/// Remove the component of `v` along the unit vector `x_hat`
#[inline]
pub fn project_tangential(v: NVec3, x_hat: NVec3) -> NVec3 {
    v - x_hat * v.dot(&x_hat)
}

/// Advance `set` by one step using the accelerations in `accels`.
/// Positions before and after the drift are written into `old` and `new`,
/// index-aligned with the points.
pub fn relaxation_step(
    set: &mut PointSet,
    accels: &[NVec3],
    params: &Parameters,
    old: &mut Vec<NVec3>,
    new: &mut Vec<NVec3>,
) {
    let n = set.len();
    debug_assert_eq!(accels.len(), n);

    old.clear();
    new.clear();
    if n == 0 {
        return;
    }

    let gain = params.step_gain();

    // Kick: keep only the drag fraction of the acceleration, scaled by relaxation,
    // then drop the radial part so the velocity lies in the tangent plane
    for (p, a) in set.points.iter_mut().zip(accels.iter()) {
        p.v += a * gain;

        let x_hat = p.x.normalize();
        p.v = project_tangential(p.v, x_hat);
    }

    // Drift: explicit Euler with unit step, then back onto the sphere
    for p in set.points.iter_mut() {
        old.push(p.x);
        p.x += p.v;
        p.x.normalize_mut();
        new.push(p.x);
    }
}
