//! The move-selecting bot.
//!
//! [`Bot::get_move`] runs a fixed cascade of generators against the live
//! board: capture, anti-capture, ladder, anti-ladder, minimax, Monte-Carlo.
//! The first generator that produces candidates decides the move (with a
//! random pick among equals). A group that cannot be saved, or a minimax
//! search where every move loses, ends in resignation when the profile
//! allows it. When every generator comes up empty the bot passes.

use std::fmt;

use log::debug;

use crate::board::{Board, Color};
use crate::ladder::{Ladder, find_anti_ladder_moves, find_ladder_move};
use crate::mcts::find_monte_carlo_moves;
use crate::minimax::find_minimax_moves;
use crate::point::{Point, str_coord};
use crate::profile::{Level, Profile};
use crate::tactics::{Defense, find_anti_capture_moves, find_capture_moves, is_valid_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Place { color: Color, point: Point },
    Pass { color: Color },
    Resign { color: Color },
}

impl Move {
    pub fn play_at(color: Color, point: Point) -> Self {
        Move::Place { color, point }
    }

    pub fn pass(color: Color) -> Self {
        Move::Pass { color }
    }

    pub fn resign(color: Color) -> Self {
        Move::Resign { color }
    }

    pub fn color(self) -> Color {
        match self {
            Move::Place { color, .. } | Move::Pass { color } | Move::Resign { color } => color,
        }
    }
}

/// Formats as a GTP vertex: a coordinate, `pass` or `resign`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { point, .. } => f.write_str(&str_coord(*point)),
            Move::Pass { .. } => f.write_str("pass"),
            Move::Resign { .. } => f.write_str("resign"),
        }
    }
}

/// A bot playing one color on a board it owns.
pub struct Bot {
    board: Board,
    color: Color,
    profile: Profile,
    rng: fastrand::Rng,
}

impl Bot {
    pub fn new(level: Level, color: Color) -> Self {
        Self::with_profile(Profile::from_level(level), color)
    }

    pub fn with_profile(profile: Profile, color: Color) -> Self {
        Self {
            board: Board::new(),
            color,
            profile,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reseed the bot's random source, for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the profile with a built-in tier.
    pub fn set_level(&mut self, level: Level) {
        self.profile = Profile::from_level(level);
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Apply a move to the board. Only placements can fail.
    pub fn play(&mut self, mv: Move) -> bool {
        match mv {
            Move::Place { color, point } => self.board.place(color, point),
            Move::Pass { .. } | Move::Resign { .. } => true,
        }
    }

    /// Choose a move for the bot's color. The board is not changed.
    pub fn get_move(&mut self) -> Move {
        let Bot {
            board,
            color,
            profile,
            rng,
        } = self;
        let (board, color) = (&*board, *color);

        if profile.capture_prob >= 1.0 || rng.f64() < profile.capture_prob {
            let captures = find_capture_moves(board, color).to_vec();
            if let Some(pt) = pick(rng, &captures) {
                debug!("{color}: capture at {}", str_coord(pt));
                return Move::play_at(color, pt);
            }
        }

        match find_anti_capture_moves(board, color, profile.can_resign) {
            Defense::Hopeless => {
                debug!("{color}: group in atari cannot be saved, resigning");
                return Move::resign(color);
            }
            Defense::Moves(moves) => {
                let moves: Vec<Point> = moves
                    .iter()
                    .filter(|&p| is_valid_move(board, p, color))
                    .collect();
                if let Some(pt) = pick(rng, &moves) {
                    debug!("{color}: defend at {}", str_coord(pt));
                    return Move::play_at(color, pt);
                }
            }
        }

        if profile.ladder_depth > 0 {
            if let Ladder::Move(pt) = find_ladder_move(board, color, profile.ladder_depth) {
                debug!("{color}: ladder at {}", str_coord(pt));
                return Move::play_at(color, pt);
            }
        }

        if profile.anti_ladder_depth > 0 {
            let moves = find_anti_ladder_moves(
                board,
                color,
                profile.anti_ladder_depth,
                profile.anti_ladder_nearest,
            );
            if let Some(pt) = pick(rng, &moves) {
                debug!("{color}: break ladder at {}", str_coord(pt));
                return Move::play_at(color, pt);
            }
        }

        if profile.minimax_depth > 0 {
            let moves = find_minimax_moves(board, color, profile);
            if let Some(pt) = pick(rng, &moves) {
                debug!("{color}: minimax move {}", str_coord(pt));
                return Move::play_at(color, pt);
            }
            if profile.can_resign {
                debug!("{color}: every minimax move loses, resigning");
                return Move::resign(color);
            }
        }

        if profile.mcts_visits > 0 {
            let moves = find_monte_carlo_moves(board, color, profile.mcts_visits, rng);
            if let Some(pt) = pick(rng, &moves) {
                debug!("{color}: monte-carlo move {}", str_coord(pt));
                return Move::play_at(color, pt);
            }
        }

        debug!("{color}: nothing to play, passing");
        Move::pass(color)
    }
}

/// Uniformly random element of `moves`.
fn pick(rng: &mut fastrand::Rng, moves: &[Point]) -> Option<Point> {
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.usize(..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::parse_coord;

    fn pt(s: &str) -> Point {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::play_at(Color::Black, pt("D4")).to_string(), "D4");
        assert_eq!(Move::pass(Color::White).to_string(), "pass");
        assert_eq!(Move::resign(Color::White).to_string(), "resign");
        assert_eq!(Move::resign(Color::White).color(), Color::White);
    }

    #[test]
    fn test_play() {
        let mut bot = Bot::new(Level::Joke, Color::Black);
        assert!(bot.play(Move::play_at(Color::Black, pt("C3"))));
        assert!(!bot.play(Move::play_at(Color::White, pt("C3"))));
        assert!(bot.play(Move::pass(Color::White)));
        assert!(bot.play(Move::resign(Color::White)));
        assert_eq!(bot.board().stone_count(), 1);
    }

    #[test]
    fn test_get_move_does_not_play() {
        let mut bot = Bot::new(Level::Easy, Color::Black).with_seed(9);
        let _ = bot.get_move();
        assert_eq!(bot.board(), &Board::new());
    }

    #[test]
    fn test_defends_group_in_atari() {
        let mut bot = Bot::new(Level::Medium, Color::White).with_seed(1);
        bot.play(Move::play_at(Color::White, pt("E5")));
        for s in ["E6", "D5", "F5"] {
            bot.play(Move::play_at(Color::Black, pt(s)));
        }
        assert_eq!(bot.get_move(), Move::play_at(Color::White, pt("E4")));
    }

    #[test]
    fn test_resigns_hopeless_group() {
        let mut bot = Bot::new(Level::Hard, Color::White).with_seed(1);
        bot.play(Move::play_at(Color::White, pt("A1")));
        bot.play(Move::play_at(Color::Black, pt("A2")));
        bot.play(Move::play_at(Color::Black, pt("B2")));
        assert_eq!(bot.get_move(), Move::resign(Color::White));
    }

    #[test]
    fn test_resigns_double_atari() {
        let mut bot = Bot::new(Level::Hard, Color::White).with_seed(1);
        for s in ["A2", "D1", "F1"] {
            bot.play(Move::play_at(Color::Black, pt(s)));
        }
        bot.play(Move::play_at(Color::White, pt("A1")));
        bot.play(Move::play_at(Color::White, pt("E1")));
        assert_eq!(bot.get_move(), Move::resign(Color::White));

        bot.set_level(Level::Medium);
        assert!(matches!(
            bot.get_move(),
            Move::Place { point, .. } if point == pt("B1") || point == pt("E2")
        ));
    }

    #[test]
    fn test_breaks_enemy_ladder() {
        let mut bot = Bot::new(Level::Hard, Color::White).with_seed(1);
        bot.play(Move::play_at(Color::Black, pt("B2")));
        bot.play(Move::play_at(Color::White, pt("B1")));
        assert_eq!(bot.get_move(), Move::play_at(Color::White, pt("C1")));
    }

    #[test]
    fn test_resigns_when_every_minimax_move_loses() {
        let profile = Profile {
            minimax_depth: 1,
            ladder_depth: 4,
            minimax_ladder: true,
            can_resign: true,
            ..Profile::default()
        };
        let mut bot = Bot::with_profile(profile, Color::Black).with_seed(1);
        bot.play(Move::play_at(Color::Black, pt("A1")));
        bot.play(Move::play_at(Color::White, pt("B2")));
        assert_eq!(bot.get_move(), Move::resign(Color::Black));

        bot.set_profile(Profile {
            can_resign: false,
            ..profile
        });
        assert_eq!(bot.get_move(), Move::pass(Color::Black));
    }

    #[test]
    fn test_plays_ladder() {
        let mut bot = Bot::new(Level::Easy, Color::Black).with_seed(1);
        bot.play(Move::play_at(Color::Black, pt("B2")));
        bot.play(Move::play_at(Color::White, pt("B1")));
        assert_eq!(bot.get_move(), Move::play_at(Color::Black, pt("C1")));
    }

    #[test]
    fn test_custom_profile_with_nothing_enabled_passes() {
        let mut bot = Bot::new(Level::Custom, Color::Black);
        assert_eq!(bot.get_move(), Move::pass(Color::Black));
    }
}
