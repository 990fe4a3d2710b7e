//! Shallow minimax over policy candidates.
//!
//! Instead of alpha-beta the search short-circuits on tactical facts: a move
//! that leaves us in atari is a forced loss, a reply that leaves the enemy in
//! atari (or facing a working ladder) is a forced win. At the depth limit a
//! position is scored by the difference of the weakest groups' liberties.

use log::debug;

use crate::board::{Board, Color};
use crate::constants::WIN_SCORE;
use crate::ladder::find_ladder_move;
use crate::point::{Point, PointSet};
use crate::policy::Policy;
use crate::profile::Profile;
use crate::tactics::{is_in_atari, is_move_self_capture, is_point_an_eye, is_valid_move};

/// Root moves with the best minimax score for `color`.
///
/// Moves that lose by force are never returned, so an empty result means
/// every candidate loses (or there are none).
pub fn find_minimax_moves(board: &Board, color: Color, profile: &Profile) -> Vec<Point> {
    let search = Search {
        color,
        enemy: !color,
        profile,
    };
    let policy = Policy::from_board(board, false);

    let mut best_score = -WIN_SCORE;
    let mut best = Vec::new();
    for pt in candidates(board, &policy, color) {
        let score = search.score_move(board, &policy, pt, 1);
        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score && score > -WIN_SCORE {
            best.push(pt);
        }
    }

    debug!(
        "minimax: {} move(s) scored {} for {}",
        best.len(),
        best_score,
        color
    );
    best
}

/// Lowest liberty count of our groups minus the enemy's. A side without
/// groups counts as zero.
pub fn liberty_balance(board: &Board, color: Color) -> i32 {
    let min_liberties = |c: Color| {
        board
            .groups()
            .filter(|g| g.color == c)
            .map(|g| g.num_liberties() as i32)
            .min()
            .unwrap_or(0)
    };
    min_liberties(color) - min_liberties(!color)
}

/// Valid policy moves that do not fill one of `color`'s own eyes.
fn candidates(board: &Board, policy: &Policy, color: Color) -> Vec<Point> {
    policy
        .list_moves(board)
        .filter(|&p| is_valid_move(board, p, color) && !is_point_an_eye(board, p, color))
        .collect()
}

/// Distinct sole liberties of `color`'s groups in atari.
fn forced_points(board: &Board, color: Color) -> PointSet {
    board
        .groups()
        .filter(|g| g.color == color)
        .filter_map(|g| g.sole_liberty())
        .collect()
}

/// A forced answer is hopeless when two groups need saving at once or the
/// save is itself a self-capture.
fn is_hopeless(board: &Board, forced: &PointSet, color: Color) -> bool {
    forced.len() > 1 || forced.iter().any(|p| is_move_self_capture(board, p, color))
}

struct Search<'a> {
    color: Color,
    enemy: Color,
    profile: &'a Profile,
}

impl Search<'_> {
    fn ladder_works(&self, board: &Board, chaser: Color) -> bool {
        self.profile.minimax_ladder
            && self.profile.ladder_depth > 0
            && find_ladder_move(board, chaser, self.profile.ladder_depth).works()
    }

    /// Score our move at `pt`: the worst outcome over the enemy's replies.
    fn score_move(&self, board: &Board, policy: &Policy, pt: Point, ply: usize) -> i32 {
        let mut after = board.clone();
        let mut policy = policy.clone();
        after.place(self.color, pt);
        policy.add(&after, pt);

        if is_in_atari(&after, self.color) || self.ladder_works(&after, self.enemy) {
            return -WIN_SCORE;
        }

        let forced = forced_points(&after, self.enemy);
        let replies = if forced.is_empty() {
            candidates(&after, &policy, self.enemy)
        } else if is_hopeless(&after, &forced, self.enemy) {
            return WIN_SCORE;
        } else {
            forced.to_vec()
        };

        let mut worst = WIN_SCORE;
        for reply in replies {
            let mut next = after.clone();
            let mut next_policy = policy.clone();
            next.place(self.enemy, reply);
            next_policy.add(&next, reply);

            let score = if is_in_atari(&next, self.enemy) || self.ladder_works(&next, self.color) {
                Some(WIN_SCORE)
            } else if ply >= self.profile.minimax_depth {
                Some(liberty_balance(&next, self.color))
            } else {
                self.best_follow_up(&next, &next_policy, ply)
            };

            if let Some(score) = score {
                worst = worst.min(score);
                if worst == -WIN_SCORE {
                    break;
                }
            }
        }
        worst
    }

    /// Our best continuation after an enemy reply, or `None` if we have no
    /// candidate moves.
    fn best_follow_up(&self, board: &Board, policy: &Policy, ply: usize) -> Option<i32> {
        let forced = forced_points(board, self.color);
        let moves = if forced.is_empty() {
            candidates(board, policy, self.color)
        } else if is_hopeless(board, &forced, self.color) {
            return Some(-WIN_SCORE);
        } else {
            forced.to_vec()
        };

        let mut best: Option<i32> = None;
        for pt in moves {
            let score = self.score_move(board, policy, pt, ply + 1);
            best = Some(best.map_or(score, |b| b.max(score)));
            if score == WIN_SCORE {
                break;
            }
        }
        best
    }
}
