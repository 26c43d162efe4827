//! # ot_core - Tennis Match Monte Carlo Odds Engine
//!
//! This library estimates the probability that one tennis player beats
//! another on a chosen surface by simulating points, games, tiebreaks, sets,
//! and matches from empirical serve/return statistics.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Hoeffding-sized trial counts with 95% confidence intervals
//! - Convergence traces and sensitivity sweeps for diagnostics
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the JSON API surface
pub use api::{run_experiment_json, ExperimentRequest, ExperimentResponse};

// Re-export the simulation engine
pub use engine::{
    point_win_probability, probability_points, sensitivity_sweep, simulate_game, simulate_match,
    simulate_set, simulate_tiebreak, ExperimentEngine, ExperimentPlan, DEFAULT_ALPHA,
    DEFAULT_EPSILON, MIN_TRIALS,
};

pub use error::{EngineError, Result};

// Re-export the data model
pub use models::{ExperimentReport, PlayerProfile, Surface, SurfaceStats, SweepPoint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
