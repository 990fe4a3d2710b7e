//! Monte-Carlo move evaluation.
//!
//! Each candidate near the existing play is scored by a fixed number of
//! random playouts. Candidates are ranked by their win/loss ratio and every
//! candidate tied for the best ratio is returned.

use log::{debug, trace};

use crate::board::{Board, Color};
use crate::constants::ZERO_LOSSES;
use crate::playout::play_random_game;
use crate::point::{Point, str_coord};
use crate::policy::Policy;
use crate::tactics::{is_point_an_eye, is_valid_move};

/// Playout statistics for one candidate move.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub point: Point,
    /// Number of playouts
    pub visits: u32,
    /// Playouts won by the proposing color
    pub wins: u32,
    /// Playouts lost by the proposing color
    pub losses: u32,
}

impl Candidate {
    pub fn new(point: Point) -> Self {
        Self {
            point,
            visits: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Wins per loss. Zero losses count as [`ZERO_LOSSES`].
    #[inline]
    pub fn ratio(&self) -> f64 {
        let losses = if self.losses == 0 {
            ZERO_LOSSES
        } else {
            self.losses as f64
        };
        self.wins as f64 / losses
    }
}

/// Legal, non-eye points in the wide neighborhood of existing stones.
pub fn candidate_moves(board: &Board, color: Color) -> Vec<Point> {
    Policy::from_board(board, true)
        .list_moves(board)
        .filter(|&p| !is_point_an_eye(board, p, color) && is_valid_move(board, p, color))
        .collect()
}

/// Run `visits` playouts for every candidate.
pub fn evaluate(
    board: &Board,
    color: Color,
    visits: usize,
    rng: &mut fastrand::Rng,
) -> Vec<Candidate> {
    candidate_moves(board, color)
        .into_iter()
        .map(|pt| {
            let mut cand = Candidate::new(pt);
            for _ in 0..visits {
                cand.visits += 1;
                match play_random_game(board, color, pt, rng) {
                    Some(winner) if winner == color => cand.wins += 1,
                    Some(_) => cand.losses += 1,
                    None => {}
                }
            }
            trace!(
                "candidate {} v={} w={} l={}",
                str_coord(pt),
                cand.visits,
                cand.wins,
                cand.losses
            );
            cand
        })
        .collect()
}

/// Candidates tied for the best win/loss ratio. Empty when `visits` is 0 or
/// there is nothing to play.
pub fn find_monte_carlo_moves(
    board: &Board,
    color: Color,
    visits: usize,
    rng: &mut fastrand::Rng,
) -> Vec<Point> {
    if visits == 0 {
        return Vec::new();
    }

    let candidates = evaluate(board, color, visits, rng);
    let best_ratio = candidates
        .iter()
        .map(Candidate::ratio)
        .fold(f64::NEG_INFINITY, f64::max);

    let best: Vec<Point> = candidates
        .iter()
        .filter(|c| c.ratio() == best_ratio)
        .map(|c| c.point)
        .collect();

    debug!(
        "monte-carlo: {} of {} candidate(s) at ratio {:.2}",
        best.len(),
        candidates.len(),
        best_ratio
    );
    best
}
