use crate::models::{PlayerProfile, Surface};

/// Point probability used when either player has no record on the surface.
/// A deliberate uninformative prior, not an error path.
pub const FALLBACK_POINT_PROB: f64 = 0.5;

/// Probability that `server` wins a single point against `receiver` on the
/// given surface.
///
/// For each serve the server's own win rate is averaged with the receiver's
/// failure-to-return rate, then the two serves are blended by the server's
/// first-serve-in rate:
///
/// `p = first_in * p_win_1st + (1 - first_in) * p_win_2nd`
///
/// The construction folds in both players' stats, so the two role
/// assignments of a pair are asymmetric and do not sum to 1.
pub fn point_win_probability(
    server: &PlayerProfile,
    receiver: &PlayerProfile,
    surface: Surface,
) -> f64 {
    let (srv, rcv) = match (server.stats(surface), receiver.stats(surface)) {
        (Some(srv), Some(rcv)) => (srv, rcv),
        _ => return FALLBACK_POINT_PROB,
    };
    let p_win_1st = (srv.win_1st + (1.0 - rcv.ret_1st)) / 2.0;
    let p_win_2nd = (srv.win_2nd + (1.0 - rcv.ret_2nd)) / 2.0;
    srv.first_in * p_win_1st + (1.0 - srv.first_in) * p_win_2nd
}
