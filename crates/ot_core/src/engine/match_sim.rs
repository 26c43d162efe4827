use rand::Rng;

use super::set_sim::simulate_set;

/// Sets needed to win a best-of-three match.
const SETS_TO_WIN: u8 = 2;

/// Simulates one best-of-three match between sides A and B.
///
/// Returns `true` when side A wins. The side opening serve in the first set
/// is a fair coin flip, and the set-opening server alternates each set. That
/// alternation is a deliberate simplification: it does not track which game
/// of the previous set the rotation actually ended on.
pub fn simulate_match<R: Rng>(p_a: f64, p_b: f64, rng: &mut R) -> bool {
    let mut sets_a = 0u8;
    let mut sets_b = 0u8;
    let mut a_opens_serve = rng.gen_bool(0.5);
    while sets_a < SETS_TO_WIN && sets_b < SETS_TO_WIN {
        if simulate_set(p_a, p_b, a_opens_serve, rng) {
            sets_a += 1;
        } else {
            sets_b += 1;
        }
        a_opens_serve = !a_opens_serve;
    }
    sets_a > sets_b
}
