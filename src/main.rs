use thomson::{Scenario, ScenarioConfig};
use thomson::{bench_forces, bench_steps, bench_step_curve};

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, relative to `scenarios/` or absolute
    #[arg(short, default_value = "thomson_13.yaml")]
    file_name: String,

    /// Override the number of points
    #[arg(short)]
    n: Option<usize>,

    /// Override the seed for the starting positions
    #[arg(long)]
    seed: Option<u64>,

    /// Override the convergence tolerance
    #[arg(long)]
    tolerance: Option<f64>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Print step cost over a range of n as CSV
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    // joining an absolute path replaces the base
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let mut scenario_cfg = ScenarioConfig::from_path(&config_path)?;

    if let Some(n) = args.n {
        scenario_cfg.parameters.n = n;
    }
    if let Some(seed) = args.seed {
        scenario_cfg.parameters.seed = Some(seed);
    }
    if let Some(tolerance) = args.tolerance {
        scenario_cfg.parameters.tolerance = tolerance;
    }

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_steps();
        return Ok(());
    }
    if args.bench_curve {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let n = scenario.parameters.n;

    let solution = scenario.into_simulation()?.run();

    // print solution numerically
    println!("\nSolution:");
    for p in &solution.positions {
        println!("({:+.6}, {:+.6}, {:+.6})", p.x, p.y, p.z);
    }

    println!(
        "\nn = {}, converged = {}, iterations = {}, energy = {:.6}, min distance = {:.6}",
        n, solution.converged, solution.iterations, solution.energy, solution.min_distance
    );

    Ok(())
}
