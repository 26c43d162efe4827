pub mod experiment;
pub mod game;
pub mod match_sim;
pub mod point_model;
pub mod set_sim;
pub mod tiebreak;

pub use experiment::{
    probability_points, sensitivity_sweep, ExperimentEngine, ExperimentPlan, DEFAULT_ALPHA,
    DEFAULT_EPSILON, MIN_TRIALS,
};
pub use game::simulate_game;
pub use match_sim::simulate_match;
pub use point_model::point_win_probability;
pub use set_sim::simulate_set;
pub use tiebreak::simulate_tiebreak;

/// Hard ceiling on points in a single game or tiebreak. Both loops terminate
/// almost surely for any probability a validated configuration can produce;
/// tripping the cap means a modeling bug, not a user error, and panics.
pub(crate) const SAFETY_STEP_CAP: u32 = 10_000;
