use serde::{Deserialize, Serialize};

use super::Surface;

/// Final output of one experiment: the win-probability estimate for player A
/// on one surface, with its sampling-error context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub surface: Surface,
    /// Matches actually simulated.
    pub trials: u64,
    /// Share of simulated matches won by player A.
    pub estimate: f64,
    /// Half-width of the 95% normal-approximation confidence interval.
    pub margin_of_error: f64,
    /// Breakeven betting odds, 1 / estimate. `None` when the estimate is
    /// exactly zero, so a division by zero never leaks out as inf.
    pub fair_odds: Option<f64>,
    /// Running-average win probability after each trial, recorded only when
    /// the engine was asked for it. Length equals `trials`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence: Option<Vec<f64>>,
}

/// One point of a sensitivity sweep: an assumed point-win probability and
/// the match-win probability it produced against a fixed opponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub point_prob: f64,
    pub match_win_prob: f64,
}
