//! Tennis odds CLI
//!
//! Loads per-surface serve/return statistics from a CSV table, runs the
//! Monte Carlo engine for a player pair, and prints the per-surface report
//! with optional convergence and sensitivity diagnostics.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ot_core::{
    probability_points, sensitivity_sweep, ExperimentEngine, ExperimentPlan, Surface,
};

/// Trials for the convergence diagnostic run.
const CONVERGENCE_TRIALS: u64 = 3_000;
/// Sensitivity sweep: point probabilities swept for player A.
const SWEEP_FROM: f64 = 0.55;
const SWEEP_TO: f64 = 0.75;
const SWEEP_STEPS: usize = 15;
/// Fixed opponent point probability during the sweep.
const SWEEP_OPPONENT_P: f64 = 0.65;
const SWEEP_TRIALS_PER_POINT: u64 = 500;

#[derive(Parser)]
#[command(name = "ot_cli")]
#[command(about = "Estimate tennis match odds by Monte Carlo simulation", long_about = None)]
struct Cli {
    /// Stats table: player,surface,first_in,win_1st,win_2nd,ret_1st,ret_2nd
    #[arg(long)]
    csv: PathBuf,

    /// Player whose win probability is estimated
    #[arg(long)]
    player_a: String,

    /// Opponent
    #[arg(long)]
    player_b: String,

    /// RNG seed; the full run replays bit for bit under the same seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Explicit trial count per surface (default: Hoeffding-sized)
    #[arg(long)]
    trials: Option<u64>,

    /// Surface to evaluate (repeatable; default: Hard, Clay and Grass)
    #[arg(long = "surface")]
    surfaces: Vec<Surface>,

    /// Print a convergence summary from a traced run on Hard
    #[arg(long, default_value = "false")]
    convergence: bool,

    /// Print the sensitivity sweep table against a fixed 0.65 opponent
    #[arg(long, default_value = "false")]
    sweep: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let player_a = ot_cli::load_player_profile(&cli.csv, &cli.player_a)?;
    let player_b = ot_cli::load_player_profile(&cli.csv, &cli.player_b)?;

    println!("Simulating {} vs {}", player_a.name, player_b.name);

    let surfaces =
        if cli.surfaces.is_empty() { Surface::ALL.to_vec() } else { cli.surfaces.clone() };

    for (index, &surface) in surfaces.iter().enumerate() {
        let mut plan = ExperimentPlan::new(
            player_a.clone(),
            player_b.clone(),
            surface,
            cli.seed.wrapping_add(index as u64),
        );
        plan.trials = cli.trials;
        let report = ExperimentEngine::new(plan)?.run();
        println!("{}", ot_cli::format_surface_report(&player_a.name, &report));
    }

    if cli.convergence {
        let mut plan =
            ExperimentPlan::new(player_a.clone(), player_b.clone(), Surface::Hard, cli.seed);
        plan.trials = Some(CONVERGENCE_TRIALS);
        let report = ExperimentEngine::new(plan)?.with_convergence_trace().run();
        if let Some(trace) = &report.convergence {
            println!("{}", ot_cli::format_convergence_summary(trace));
        }
    }

    if cli.sweep {
        let grid = probability_points(SWEEP_FROM, SWEEP_TO, SWEEP_STEPS);
        let points = sensitivity_sweep(&grid, SWEEP_OPPONENT_P, SWEEP_TRIALS_PER_POINT, cli.seed)?;
        print!("{}", ot_cli::format_sweep_table(&points));
    }

    Ok(())
}
