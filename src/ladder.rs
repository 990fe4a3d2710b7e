//! Ladder reading.
//!
//! A ladder is a chase where every chasing stone puts an enemy group in
//! atari and the group's single escape leaves it with two liberties again,
//! until it runs into the edge or a friendly stone and dies.

use crate::board::{Board, Color};
use crate::point::Point;
use crate::tactics::{is_in_atari, is_valid_move};

/// Outcome of reading a ladder for the chasing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    /// An enemy group is in atari before any chasing stone is played.
    AlreadyCaptured,
    /// Playing here starts a ladder that captures.
    Move(Point),
    /// No working ladder within the depth bound.
    NoEscape,
}

impl Ladder {
    /// True if the chase captures, now or after the returned move.
    #[inline]
    pub fn works(self) -> bool {
        self != Ladder::NoEscape
    }
}

/// Read whether `color` can capture an enemy group with two liberties by
/// ladder, looking at most `max_depth` chasing moves ahead.
///
/// Candidate liberties are tried in point order; the first that works wins.
pub fn find_ladder_move(board: &Board, color: Color, max_depth: usize) -> Ladder {
    chase(board, color, 1, max_depth)
}

fn chase(board: &Board, color: Color, depth: usize, max_depth: usize) -> Ladder {
    if depth > max_depth {
        return Ladder::NoEscape;
    }

    let enemy = !color;
    if board.groups().any(|g| g.color == enemy && g.is_in_atari()) {
        return Ladder::AlreadyCaptured;
    }

    for group in board
        .groups()
        .filter(|g| g.color == enemy && g.num_liberties() == 2)
    {
        for lib in group.liberties.iter() {
            if !is_valid_move(board, lib, color) {
                continue;
            }

            let mut next = board.clone();
            next.place(color, lib);
            if is_in_atari(&next, color) {
                continue;
            }

            // With several enemy groups in atari only the first one runs.
            let escape = next
                .groups()
                .filter(|g| g.color == enemy)
                .find_map(|g| g.sole_liberty());

            // No group left in atari, or the escape is suicide: the enemy
            // has nowhere to run.
            let Some(escape) = escape else {
                return Ladder::Move(lib);
            };
            if !next.place(enemy, escape) {
                return Ladder::Move(lib);
            }

            if chase(&next, color, depth + 1, max_depth).works() {
                return Ladder::Move(lib);
            }
        }
    }

    Ladder::NoEscape
}

/// Points where `color` can break a working enemy ladder.
///
/// Empty unless the opponent currently has a ladder against `color` within
/// `max_depth`. A point qualifies when `color` can play there, is not left in
/// atari, and the opponent's ladder stops working. With `nearest`, points
/// orthogonally next to a `color` stone are preferred when there are any.
pub fn find_anti_ladder_moves(
    board: &Board,
    color: Color,
    max_depth: usize,
    nearest: bool,
) -> Vec<Point> {
    let enemy = !color;
    if !find_ladder_move(board, enemy, max_depth).works() {
        return Vec::new();
    }

    let moves: Vec<Point> = Point::all()
        .filter(|&pt| is_valid_move(board, pt, color))
        .filter(|&pt| {
            let mut next = board.clone();
            next.place(color, pt);
            !is_in_atari(&next, color) && !find_ladder_move(&next, enemy, max_depth).works()
        })
        .collect();

    if nearest {
        let near: Vec<Point> = moves
            .iter()
            .copied()
            .filter(|pt| {
                pt.neighbors()
                    .into_iter()
                    .any(|n| board.color_at(n) == Some(color))
            })
            .collect();
        if !near.is_empty() {
            return near;
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::parse_coord;

    fn setup(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::new();
        for s in black {
            assert!(board.place(Color::Black, parse_coord(s).unwrap()));
        }
        for s in white {
            assert!(board.place(Color::White, parse_coord(s).unwrap()));
        }
        board
    }

    fn pt(s: &str) -> Point {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_already_captured() {
        let board = setup(&["A2"], &["A1"]);
        assert_eq!(find_ladder_move(&board, Color::Black, 4), Ladder::AlreadyCaptured);
    }

    #[test]
    fn test_zero_depth_never_reads() {
        let board = setup(&["A2"], &["A1"]);
        assert_eq!(find_ladder_move(&board, Color::Black, 0), Ladder::NoEscape);
    }

    #[test]
    fn test_first_line_chase() {
        // White B1 escapes to A1 after C1 and is left with a single liberty.
        let board = setup(&["B2"], &["B1"]);
        assert_eq!(find_ladder_move(&board, Color::Black, 2), Ladder::Move(pt("C1")));
        assert_eq!(find_ladder_move(&board, Color::Black, 1), Ladder::NoEscape);
    }

    #[test]
    fn test_chaser_never_self_ataris() {
        // Playing A1 first would leave the black stone in atari.
        let board = setup(&["B2"], &["B1"]);
        assert_ne!(find_ladder_move(&board, Color::Black, 10), Ladder::Move(pt("A1")));
    }

    #[test]
    fn test_two_escape_routes() {
        let board = setup(&["D5", "C4"], &["D4"]);
        assert_eq!(find_ladder_move(&board, Color::Black, 10), Ladder::NoEscape);
    }

    #[test]
    fn test_anti_ladder_moves() {
        let board = setup(&["B2"], &["B1"]);

        let near = find_anti_ladder_moves(&board, Color::White, 4, true);
        assert_eq!(near, vec![pt("C1")]);

        let all = find_anti_ladder_moves(&board, Color::White, 4, false);
        assert!(all.contains(&pt("C1")));
        assert!(all.contains(&pt("C2")));
        assert!(!all.contains(&pt("A1")));
    }

    #[test]
    fn test_anti_ladder_nearest_falls_back_to_all_moves() {
        // Black C5 ladders white C4. Neither breaker touches a white stone.
        let board = setup(&["D4", "C1", "E2", "B4"], &["B3", "C4", "E1"]);
        assert_eq!(find_ladder_move(&board, Color::Black, 4), Ladder::Move(pt("C5")));

        let all = find_anti_ladder_moves(&board, Color::White, 4, false);
        assert_eq!(all, vec![pt("B5"), pt("A4")]);
        assert_eq!(find_anti_ladder_moves(&board, Color::White, 4, true), all);
    }

    #[test]
    fn test_anti_ladder_without_threat() {
        let board = setup(&["D5", "C4"], &["D4"]);
        assert!(find_anti_ladder_moves(&board, Color::White, 10, true).is_empty());
    }
}
