//! Stateless tactical analyzers over a board snapshot.
//!
//! None of these functions mutate the board they are given; anything that
//! needs to try a move does so on a clone.

use crate::board::{Board, Color};
use crate::group::Group;
use crate::point::{Point, PointSet};

/// Result of looking for defenses against an imminent capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defense {
    /// Points that save a group in atari (empty when nothing is in atari).
    Moves(PointSet),
    /// A group in atari cannot be saved and resigning is allowed.
    Hopeless,
}

/// True if any group of `color` has exactly one liberty.
pub fn is_in_atari(board: &Board, color: Color) -> bool {
    board
        .groups()
        .any(|g| g.color == color && g.is_in_atari())
}

/// Sole liberties of `color`'s groups in atari.
fn atari_liberties(board: &Board, color: Color) -> impl Iterator<Item = Point> + '_ {
    board
        .groups()
        .filter(move |g| g.color == color)
        .filter_map(Group::sole_liberty)
}

/// Points where `color` captures an enemy group right away.
pub fn find_capture_moves(board: &Board, color: Color) -> PointSet {
    atari_liberties(board, !color).collect()
}

/// True if playing at `pt` is illegal for `color`, or leaves the resulting
/// group with at most one liberty.
pub fn is_move_self_capture(board: &Board, pt: Point, color: Color) -> bool {
    let mut copy = board.clone();
    if !copy.place(color, pt) {
        return true;
    }
    copy.group_at(pt).is_none_or(|g| g.num_liberties() <= 1)
}

/// Points where `color` must play to save groups in atari.
///
/// When `can_resign` is set the position is [`Defense::Hopeless`] if an
/// escape is itself a self-capture, or if playing it still leaves `color` in
/// atari (two groups with different last liberties). Otherwise every escape
/// point is collected regardless.
pub fn find_anti_capture_moves(board: &Board, color: Color, can_resign: bool) -> Defense {
    let mut moves = PointSet::new();
    for pt in atari_liberties(board, color) {
        if can_resign {
            if is_move_self_capture(board, pt, color) {
                return Defense::Hopeless;
            }
            let mut after = board.clone();
            after.place(color, pt);
            if is_in_atari(&after, color) {
                return Defense::Hopeless;
            }
        }
        moves.insert(pt);
    }
    Defense::Moves(moves)
}

/// Check if `pt` is an eye of `color`.
///
/// Every on-grid orthogonal neighbor must be a `color` stone. In the center at
/// least 3 of the 4 diagonals must be `color` stones; on the edge every
/// on-grid diagonal must be.
pub fn is_point_an_eye(board: &Board, pt: Point, color: Color) -> bool {
    if !board.is_empty_at(pt) {
        return false;
    }

    let own = |p: Point| board.color_at(p) == Some(color);

    if !pt.neighbors().into_iter().filter(|p| p.is_on_grid()).all(own) {
        return false;
    }

    let mut num_corners = 0;
    let mut side_corners = 0;
    for p in pt.corners() {
        if !p.is_on_grid() {
            side_corners += 1;
        } else if own(p) {
            num_corners += 1;
        }
    }

    if side_corners == 0 {
        num_corners >= 3
    } else {
        side_corners + num_corners == 4
    }
}

/// True if `pt` is empty and playing there is not suicide.
pub fn is_valid_move(board: &Board, pt: Point, color: Color) -> bool {
    board.is_legal(color, pt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::parse_coord;

    fn setup(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::new();
        for s in black {
            assert!(board.place(Color::Black, parse_coord(s).unwrap()), "black {s}");
        }
        for s in white {
            assert!(board.place(Color::White, parse_coord(s).unwrap()), "white {s}");
        }
        board
    }

    fn pt(s: &str) -> Point {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_atari_and_capture_moves() {
        let board = setup(&["A2"], &["A1"]);
        assert!(is_in_atari(&board, Color::White));
        assert!(!is_in_atari(&board, Color::Black));
        assert_eq!(find_capture_moves(&board, Color::Black).to_vec(), vec![pt("B1")]);
        assert!(find_capture_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn test_capture_moves_deduplicated() {
        // Two white stones share their last liberty at B1.
        let board = setup(&["A2", "B2", "C2", "D1"], &["A1", "C1"]);
        assert_eq!(find_capture_moves(&board, Color::Black).to_vec(), vec![pt("B1")]);
    }

    #[test]
    fn test_anti_capture_escape() {
        let board = setup(&["A2"], &["A1"]);
        assert_eq!(
            find_anti_capture_moves(&board, Color::White, true),
            Defense::Moves([pt("B1")].into_iter().collect())
        );
    }

    #[test]
    fn test_anti_capture_hopeless_only_when_resigning() {
        // White A1 escapes to B1 but then sits in atari again at C1.
        let board = setup(&["A2", "B2"], &["A1"]);
        assert!(is_move_self_capture(&board, pt("B1"), Color::White));
        assert_eq!(
            find_anti_capture_moves(&board, Color::White, true),
            Defense::Hopeless
        );
        assert_eq!(
            find_anti_capture_moves(&board, Color::White, false),
            Defense::Moves([pt("B1")].into_iter().collect())
        );
    }

    #[test]
    fn test_double_atari_is_hopeless_when_resigning() {
        // White A1 hangs on B1 and white E1 on E2.
        let board = setup(&["A2", "D1", "F1"], &["A1", "E1"]);
        assert_eq!(
            find_anti_capture_moves(&board, Color::White, true),
            Defense::Hopeless
        );
        assert_eq!(
            find_anti_capture_moves(&board, Color::White, false),
            Defense::Moves([pt("B1"), pt("E2")].into_iter().collect())
        );
    }

    #[test]
    fn test_no_atari_means_no_defense_needed() {
        let board = setup(&["D4"], &["F6"]);
        assert_eq!(
            find_anti_capture_moves(&board, Color::Black, true),
            Defense::Moves(PointSet::new())
        );
    }

    #[test]
    fn test_center_eye() {
        let board = setup(&["D5", "C4", "E4", "D3", "C5", "E5", "C3", "E3"], &[]);
        assert!(is_point_an_eye(&board, pt("D4"), Color::Black));
        assert!(!is_point_an_eye(&board, pt("D4"), Color::White));
    }

    #[test]
    fn test_center_eye_tolerates_one_bad_diagonal() {
        let board = setup(&["D5", "C4", "E4", "D3", "C5", "E5", "C3"], &["E3"]);
        assert!(is_point_an_eye(&board, pt("D4"), Color::Black));

        let board = setup(&["D5", "C4", "E4", "D3", "C5", "E5"], &["C3", "E3"]);
        assert!(!is_point_an_eye(&board, pt("D4"), Color::Black));
    }

    #[test]
    fn test_edge_eye_needs_all_diagonals() {
        let board = setup(&["A2", "B2", "B1"], &[]);
        assert!(is_point_an_eye(&board, pt("A1"), Color::Black));

        let board = setup(&["A2", "B1"], &[]);
        assert!(!is_point_an_eye(&board, pt("A1"), Color::Black));
    }

    #[test]
    fn test_not_an_eye_with_empty_or_enemy_neighbor() {
        let board = setup(&["D5", "C4", "E4", "C5", "E5", "C3", "E3"], &[]);
        assert!(!is_point_an_eye(&board, pt("D4"), Color::Black));

        let board = setup(&["D5", "C4", "E4", "C5", "E5", "C3", "E3"], &["D3"]);
        assert!(!is_point_an_eye(&board, pt("D4"), Color::Black));
    }

    #[test]
    fn test_valid_move() {
        let board = setup(&["A2", "B1"], &[]);
        assert!(!is_valid_move(&board, pt("A1"), Color::White));
        assert!(is_valid_move(&board, pt("A1"), Color::Black));
        assert!(!is_valid_move(&board, pt("A2"), Color::Black));
    }
}
