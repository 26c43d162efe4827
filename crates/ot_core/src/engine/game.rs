use rand::Rng;

use super::SAFETY_STEP_CAP;

/// Points needed before the win-by-2 margin rule can end a game.
const GAME_TARGET: u32 = 4;

/// Simulates one service game under a fixed server point-win probability.
///
/// Returns `true` when the server holds. Scoring is deuce/advantage: first
/// to 4 points, but always by a margin of 2, with no upper bound on points.
pub fn simulate_game<R: Rng>(p: f64, rng: &mut R) -> bool {
    let mut server = 0u32;
    let mut receiver = 0u32;
    for _ in 0..SAFETY_STEP_CAP {
        if rng.gen::<f64>() < p {
            server += 1;
        } else {
            receiver += 1;
        }
        if server >= GAME_TARGET && server >= receiver + 2 {
            return true;
        }
        if receiver >= GAME_TARGET && receiver >= server + 2 {
            return false;
        }
    }
    panic!("service game exceeded {} points at p = {}", SAFETY_STEP_CAP, p);
}
