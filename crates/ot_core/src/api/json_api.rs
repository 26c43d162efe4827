use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::engine::{probability_points, sensitivity_sweep, ExperimentEngine, ExperimentPlan};
use crate::models::{ExperimentReport, PlayerProfile, Surface, SurfaceStats, SweepPoint};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ExperimentRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub player_a: PlayerData,
    pub player_b: PlayerData,
    /// Surfaces to evaluate, e.g. ["Hard", "Clay"]. Empty means all three.
    #[serde(default)]
    pub surfaces: Vec<String>,
    /// Explicit trial count per surface; omitted means Hoeffding-sized.
    #[serde(default)]
    pub trials: Option<u64>,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub epsilon: Option<f64>,
    /// Attach the running-average trace to each surface result.
    #[serde(default)]
    pub record_convergence: bool,
    #[serde(default)]
    pub sweep: Option<SweepRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub name: String,
    /// Surface name -> serve/return stats. Surfaces may be missing.
    #[serde(default)]
    pub surfaces: HashMap<String, SurfaceStats>,
}

/// Sensitivity sweep section: point probabilities `from..=to` in `steps`
/// steps for player A, a fixed opponent probability, reduced trials each.
#[derive(Debug, Deserialize)]
pub struct SweepRequest {
    pub from: f64,
    pub to: f64,
    pub steps: usize,
    pub opponent_point_prob: f64,
    pub trials_per_point: u64,
}

#[derive(Debug, Serialize)]
pub struct ExperimentResponse {
    pub schema_version: u8,
    pub player_a: String,
    pub player_b: String,
    pub results: Vec<ExperimentReport>,
    pub sweep: Option<Vec<SweepPoint>>,
}

fn convert_player(data: PlayerData) -> Result<PlayerProfile, String> {
    let mut profile = PlayerProfile::new(data.name);
    for (key, stats) in data.surfaces {
        let surface = Surface::from_str(&key)?;
        profile.surfaces.insert(surface, stats);
    }
    profile.validate()?;
    Ok(profile)
}

/// Main entry point for the JSON API - runs experiments from a JSON request.
///
/// Everything is parsed and validated before the first match simulates, so
/// an invalid request never produces a partial run.
pub fn run_experiment_json(request_json: &str) -> Result<String, String> {
    let request: ExperimentRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let player_a = convert_player(request.player_a)
        .map_err(|e| format!("Player A validation failed: {}", e))?;
    let player_b = convert_player(request.player_b)
        .map_err(|e| format!("Player B validation failed: {}", e))?;

    let surfaces: Vec<Surface> = if request.surfaces.is_empty() {
        Surface::ALL.to_vec()
    } else {
        request
            .surfaces
            .iter()
            .map(|s| Surface::from_str(s))
            .collect::<Result<_, _>>()?
    };

    // Construct every engine first so configuration errors on any surface
    // show up before a single trial runs.
    let mut engines = Vec::with_capacity(surfaces.len());
    for (index, &surface) in surfaces.iter().enumerate() {
        // Derive per-surface seeds so one request replays end to end without
        // reusing the identical stream on every surface.
        let mut plan = ExperimentPlan::new(
            player_a.clone(),
            player_b.clone(),
            surface,
            request.seed.wrapping_add(index as u64),
        );
        plan.trials = request.trials;
        if let Some(alpha) = request.alpha {
            plan.alpha = alpha;
        }
        if let Some(epsilon) = request.epsilon {
            plan.epsilon = epsilon;
        }
        let mut engine = ExperimentEngine::new(plan).map_err(|e| e.to_string())?;
        if request.record_convergence {
            engine = engine.with_convergence_trace();
        }
        engines.push(engine);
    }

    // The sweep validates its own inputs before simulating.
    let sweep = match request.sweep {
        Some(cfg) => {
            if cfg.steps == 0 {
                return Err("invalid configuration: sweep steps must be at least 1".to_string());
            }
            let grid = probability_points(cfg.from, cfg.to, cfg.steps);
            let points =
                sensitivity_sweep(&grid, cfg.opponent_point_prob, cfg.trials_per_point, request.seed)
                    .map_err(|e| e.to_string())?;
            Some(points)
        }
        None => None,
    };

    let results: Vec<ExperimentReport> = engines.into_iter().map(ExperimentEngine::run).collect();

    let response = ExperimentResponse {
        schema_version: SCHEMA_VERSION,
        player_a: player_a.name,
        player_b: player_b.name,
        results,
        sweep,
    };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}
