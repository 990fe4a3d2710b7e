//! Random playouts (game simulation) used by the Monte-Carlo evaluator.
//!
//! A playout plays a candidate move and then lets both sides alternate:
//! forced defenses when a group is in atari, random legal non-eye moves
//! otherwise. The first side to end its turn in atari loses.

use crate::board::{Board, Color};
use crate::constants::MAX_GAME_LEN;
use crate::point::Point;
use crate::tactics::{
    Defense, find_anti_capture_moves, is_in_atari, is_point_an_eye, is_valid_move,
};

/// Play `pt` for `color` on a copy of `board` and simulate the rest.
///
/// Returns the winner, or `None` when the board fills up (or the length
/// limit is reached) without either side being caught in atari.
pub fn play_random_game(
    board: &Board,
    color: Color,
    pt: Point,
    rng: &mut fastrand::Rng,
) -> Option<Color> {
    let mut board = board.clone();
    if !board.place(color, pt) {
        return Some(!color);
    }

    let mut empties: Vec<Point> = Point::all().filter(|&p| board.is_empty_at(p)).collect();
    let mut mover = color;

    for _ in 0..MAX_GAME_LEN {
        mover = !mover;

        // The side that just moved left itself in atari.
        if is_in_atari(&board, !mover) {
            return Some(mover);
        }

        let forced = match find_anti_capture_moves(&board, mover, true) {
            Defense::Hopeless => return Some(!mover),
            Defense::Moves(moves) => moves.first(),
        };

        let next = match forced {
            Some(p) => {
                if let Some(i) = empties.iter().position(|&e| e == p) {
                    empties.swap_remove(i);
                }
                p
            }
            None => choose_random_move(&board, &mut empties, mover, rng)?,
        };

        board.place(mover, next);
    }

    None
}

/// Draw random points until one is a legal move that does not fill an eye.
///
/// Drawn points are discarded whether or not they were playable.
fn choose_random_move(
    board: &Board,
    empties: &mut Vec<Point>,
    color: Color,
    rng: &mut fastrand::Rng,
) -> Option<Point> {
    while !empties.is_empty() {
        let pt = empties.swap_remove(rng.usize(..empties.len()));
        if !is_point_an_eye(board, pt, color) && is_valid_move(board, pt, color) {
            return Some(pt);
        }
    }
    None
}
