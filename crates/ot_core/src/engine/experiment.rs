use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::match_sim::simulate_match;
use super::point_model::point_win_probability;
use crate::error::{EngineError, Result};
use crate::models::{ExperimentReport, PlayerProfile, Surface, SweepPoint};

/// Floor on the planned trial count when sizing from the Hoeffding bound.
pub const MIN_TRIALS: u64 = 10_000;
/// Default failure probability for the Hoeffding sizing rule.
pub const DEFAULT_ALPHA: f64 = 0.05;
/// Default half-width target for the Hoeffding sizing rule.
pub const DEFAULT_EPSILON: f64 = 0.01;
/// z-score of the 95% normal-approximation confidence interval.
const Z_95: f64 = 1.96;

/// Everything one experiment needs: the player pair, the surface, the seed,
/// and the statistical knobs.
#[derive(Debug, Clone)]
pub struct ExperimentPlan {
    pub player_a: PlayerProfile,
    pub player_b: PlayerProfile,
    pub surface: Surface,
    pub seed: u64,
    /// Explicit trial count. `None` sizes the run from `alpha`/`epsilon`.
    pub trials: Option<u64>,
    pub alpha: f64,
    pub epsilon: f64,
}

impl ExperimentPlan {
    pub fn new(player_a: PlayerProfile, player_b: PlayerProfile, surface: Surface, seed: u64) -> Self {
        Self {
            player_a,
            player_b,
            surface,
            seed,
            trials: None,
            alpha: DEFAULT_ALPHA,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Runs repeated match simulations for one plan and turns the win counts
/// into an estimate with a confidence interval.
///
/// Owns its generator, seeded from the plan, so a plan replays to the same
/// report bit for bit.
pub struct ExperimentEngine {
    rng: ChaCha8Rng,
    surface: Surface,
    p_a: f64,
    p_b: f64,
    trials: u64,
    record_convergence: bool,
}

impl ExperimentEngine {
    /// Validates the plan and derives both point probabilities. Configuration
    /// errors surface here, before any simulation runs.
    pub fn new(plan: ExperimentPlan) -> Result<Self> {
        if plan.trials == Some(0) {
            return Err(EngineError::InvalidConfig("trials must be at least 1".into()));
        }
        if !(plan.epsilon > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                plan.epsilon
            )));
        }
        if !(plan.alpha > 0.0 && plan.alpha < 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "alpha must lie in (0, 1), got {}",
                plan.alpha
            )));
        }

        let p_a = point_win_probability(&plan.player_a, &plan.player_b, plan.surface);
        let p_b = point_win_probability(&plan.player_b, &plan.player_a, plan.surface);
        let trials =
            plan.trials.unwrap_or_else(|| hoeffding_trials(plan.alpha, plan.epsilon));
        log::debug!(
            "experiment on {}: p_a = {:.4}, p_b = {:.4}, {} trials",
            plan.surface.code(),
            p_a,
            p_b,
            trials
        );

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(plan.seed),
            surface: plan.surface,
            p_a,
            p_b,
            trials,
            record_convergence: false,
        })
    }

    /// Record the running-average win probability after every trial.
    pub fn with_convergence_trace(mut self) -> Self {
        self.record_convergence = true;
        self
    }

    /// Point probabilities derived from the plan, `(server A, server B)`.
    pub fn point_probabilities(&self) -> (f64, f64) {
        (self.p_a, self.p_b)
    }

    pub fn run(mut self) -> ExperimentReport {
        let mut wins = 0u64;
        let mut trace = if self.record_convergence {
            Vec::with_capacity(self.trials as usize)
        } else {
            Vec::new()
        };
        for trial in 0..self.trials {
            if simulate_match(self.p_a, self.p_b, &mut self.rng) {
                wins += 1;
            }
            if self.record_convergence {
                trace.push(wins as f64 / (trial + 1) as f64);
            }
        }

        let estimate = wins as f64 / self.trials as f64;
        let margin_of_error = margin_of_error(estimate, self.trials);
        log::debug!(
            "{}: estimate {:.4} +/- {:.4} after {} trials",
            self.surface.code(),
            estimate,
            margin_of_error,
            self.trials
        );
        ExperimentReport {
            surface: self.surface,
            trials: self.trials,
            estimate,
            margin_of_error,
            fair_odds: fair_odds(estimate),
            convergence: self.record_convergence.then_some(trace),
        }
    }
}

/// Hoeffding-bound sample size for a two-sided `epsilon` half-width at
/// failure probability `alpha`, floored at [`MIN_TRIALS`] so small bounds
/// never produce degenerate runs.
pub fn hoeffding_trials(alpha: f64, epsilon: f64) -> u64 {
    let bound = ((2.0 / alpha).ln() / (2.0 * epsilon * epsilon)).ceil() as u64;
    bound.max(MIN_TRIALS)
}

/// Half-width of the 95% normal-approximation interval on a binomial
/// proportion.
pub fn margin_of_error(estimate: f64, trials: u64) -> f64 {
    Z_95 * (estimate * (1.0 - estimate) / trials as f64).sqrt()
}

/// Breakeven odds for an estimate; `None` when the estimate is exactly zero.
pub fn fair_odds(estimate: f64) -> Option<f64> {
    (estimate > 0.0).then(|| 1.0 / estimate)
}

/// Inclusive linear grid of `n` probabilities from `lo` to `hi`.
pub fn probability_points(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

/// Match-win probability at each swept point probability, against a fixed
/// opponent point probability, at a reduced trial count per point.
///
/// All probability inputs are validated before the first match simulates.
pub fn sensitivity_sweep(
    points: &[f64],
    opponent_p: f64,
    trials_per_point: u64,
    seed: u64,
) -> Result<Vec<SweepPoint>> {
    if trials_per_point == 0 {
        return Err(EngineError::InvalidConfig("trials_per_point must be at least 1".into()));
    }
    check_probability("opponent_p", opponent_p)?;
    for &p in points {
        check_probability("point_prob", p)?;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(points.len());
    for &point_prob in points {
        let wins = (0..trials_per_point)
            .filter(|_| simulate_match(point_prob, opponent_p, &mut rng))
            .count();
        out.push(SweepPoint {
            point_prob,
            match_win_prob: wins as f64 / trials_per_point as f64,
        });
    }
    Ok(out)
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidProbability { name: name.to_string(), value })
    }
}
