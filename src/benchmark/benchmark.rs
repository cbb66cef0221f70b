use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::CoulombRepulsion;
use crate::simulation::params::Parameters;
use crate::simulation::solver::Simulation;
use crate::simulation::states::{NVec3, PointSet};

/// Time one force evaluation, sequential pair sum vs rayon per-point sum
pub fn bench_forces() {
    // Different set sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let Some(set) = make_point_set(n) else {
            continue;
        };
        let mut out = vec![NVec3::zeros(); n];
        let field = CoulombRepulsion::default();

        // Warm up
        field.accumulate_accels(&set, &mut out);
        field.accumulate_accels_par(&set, &mut out);

        // Time sequential
        let t0 = Instant::now();
        field.accumulate_accels(&set, &mut out);
        let dt_seq = t0.elapsed().as_secs_f64();

        // Time parallel
        let t1 = Instant::now();
        field.accumulate_accels_par(&set, &mut out);
        let dt_par = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, sequential = {:8.6} s, parallel = {:8.6} s", dt_seq, dt_par);
    }
}

/// Time full relaxation steps (forces + integration + convergence check)
pub fn bench_steps() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 5;

    for n in ns {
        let mut per_step = [0.0; 2];

        for (slot, parallel) in [false, true].into_iter().enumerate() {
            let Some(mut sim) = make_simulation(n, parallel) else {
                continue;
            };

            // Warm-up
            sim.step();

            let t0 = Instant::now();
            for _ in 0..steps {
                sim.step();
            }
            per_step[slot] = t0.elapsed().as_secs_f64() / steps as f64;
        }

        println!(
            "N = {:5}, sequential step = {:8.6} s,   parallel step = {:8.6} s",
            n, per_step[0], per_step[1]
        );
    }
}

/// Step cost over a range of n, printed as CSV
pub fn bench_step_curve() {
    println!("N,sequential_ms,parallel_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut ms = [0.0; 2];

        for (slot, parallel) in [false, true].into_iter().enumerate() {
            let Some(mut sim) = make_simulation(n, parallel) else {
                continue;
            };

            let t0 = Instant::now();
            for _ in 0..steps {
                sim.step();
            }
            ms[slot] = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        }

        println!("{},{:.6},{:.6}", n, ms[0], ms[1]);
    }
}

/// Deterministic spread of `n` points, no rng needed
fn make_point_set(n: usize) -> Option<PointSet> {
    let positions: Vec<NVec3> = (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec3::new(
                (i_f * 0.37).sin(),
                (i_f * 0.13).cos(),
                (i_f * 0.07).sin() + 0.01,
            )
        })
        .collect();

    PointSet::from_positions(&positions).ok()
}

fn make_simulation(n: usize, parallel: bool) -> Option<Simulation> {
    let engine = Engine {
        parallel,
        report_interval: 0,
    };
    let mut parameters = Parameters::new(n, 1e-12);
    parameters.max_iterations = u64::MAX;

    Simulation::from_points(parameters, engine, make_point_set(n)?).ok()
}
