//! Candidate move generation from the neighborhood of stones already played.
//!
//! The policy keeps a running set of points near earlier moves. Search copies
//! it alongside the board and records each speculative move with
//! [`Policy::add`], so candidates follow the play.

use crate::board::Board;
use crate::constants::N;
use crate::point::{Point, PointSet};

#[derive(Clone, Debug)]
pub struct Policy {
    moves: PointSet,
    wide: bool,
}

impl Policy {
    /// Seed the policy with the points around every stone on `board`.
    ///
    /// `wide` uses the 5x5 neighborhood instead of the 3x3 ring. On an empty
    /// board the neighborhood of the center is used.
    pub fn from_board(board: &Board, wide: bool) -> Self {
        let mut policy = Self {
            moves: PointSet::new(),
            wide,
        };

        let stones: Vec<Point> = board.groups().flat_map(|g| g.stones.iter()).collect();
        if stones.is_empty() {
            let center = Point::new(N as i32 / 2, N as i32 / 2);
            policy.moves.insert(center);
            policy.expand(board, center);
        } else {
            for stone in stones {
                policy.expand(board, stone);
            }
        }
        policy
    }

    fn expand(&mut self, board: &Board, pt: Point) {
        let empty = |p: &Point| board.is_empty_at(*p);
        if self.wide {
            self.moves.extend(pt.locality2().into_iter().filter(empty));
        } else {
            self.moves.extend(pt.locality().into_iter().filter(empty));
        }
    }

    /// Record a move just played on `board`.
    pub fn add(&mut self, board: &Board, pt: Point) {
        self.moves.remove(pt);
        self.expand(board, pt);
    }

    /// Candidate points that are still empty on `board`.
    pub fn list_moves<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Point> + 'a {
        self.moves.iter().filter(|&p| board.is_empty_at(p))
    }
}
