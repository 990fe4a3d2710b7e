//! Bot strength levels and the search parameters they select.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Strength tier. `Custom` takes its parameters from an explicit [`Profile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Level {
    Custom,
    Joke,
    Easy,
    #[default]
    Medium,
    Hard,
    Crazy,
    Demon,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Custom,
        Level::Joke,
        Level::Easy,
        Level::Medium,
        Level::Hard,
        Level::Crazy,
        Level::Demon,
    ];

    /// Level by numeric id: 0 is custom, 1 (joke) through 6 (demon).
    pub fn from_index(index: u8) -> Option<Level> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Custom => "custom",
            Level::Joke => "joke",
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
            Level::Crazy => "crazy",
            Level::Demon => "demon",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bot level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a level name or its numeric id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(index) = s.parse::<u8>() {
            return Level::from_index(index).ok_or(ParseLevelError(s));
        }
        Level::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or(ParseLevelError(s))
    }
}

/// Search parameters of a bot. Built once and never mutated by the bot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Random playouts per Monte-Carlo candidate; 0 disables the stage.
    pub mcts_visits: usize,
    /// Chasing moves read ahead when looking for our own ladders.
    pub ladder_depth: usize,
    /// Chasing moves read ahead when looking for enemy ladders.
    pub anti_ladder_depth: usize,
    /// Minimax plies; 0 disables the stage.
    pub minimax_depth: usize,
    /// Prefer ladder breakers next to our own stones.
    pub anti_ladder_nearest: bool,
    /// Allow resigning when a group cannot be saved or minimax finds nothing.
    pub can_resign: bool,
    /// Treat ladders as forced outcomes inside minimax.
    pub minimax_ladder: bool,
    /// Probability of taking an available capture.
    pub capture_prob: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            mcts_visits: 0,
            ladder_depth: 0,
            anti_ladder_depth: 0,
            minimax_depth: 0,
            anti_ladder_nearest: false,
            can_resign: false,
            minimax_ladder: false,
            capture_prob: 1.0,
        }
    }
}

impl Profile {
    /// The parameters of a built-in tier. `Custom` yields the defaults.
    pub fn from_level(level: Level) -> Self {
        let base = Self::default();
        match level {
            Level::Custom => base,
            Level::Joke => Self {
                mcts_visits: 5,
                ..base
            },
            Level::Easy => Self {
                mcts_visits: 50,
                minimax_depth: 1,
                ladder_depth: 4,
                anti_ladder_depth: 4,
                ..base
            },
            Level::Medium => Self {
                mcts_visits: 100,
                minimax_depth: 1,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                ..base
            },
            Level::Hard => Self {
                mcts_visits: 100,
                minimax_depth: 1,
                ladder_depth: 6,
                anti_ladder_depth: 6,
                anti_ladder_nearest: true,
                can_resign: true,
                ..base
            },
            Level::Crazy => Self {
                mcts_visits: 250,
                minimax_depth: 1,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                anti_ladder_nearest: true,
                minimax_ladder: true,
                can_resign: true,
                ..base
            },
            Level::Demon => Self {
                mcts_visits: 500,
                minimax_depth: 2,
                ladder_depth: 10,
                anti_ladder_depth: 10,
                anti_ladder_nearest: true,
                can_resign: true,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_index() {
        assert_eq!(Level::from_index(0), Some(Level::Custom));
        assert_eq!(Level::from_index(1), Some(Level::Joke));
        assert_eq!(Level::from_index(6), Some(Level::Demon));
        assert_eq!(Level::from_index(7), None);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("Hard".parse::<Level>(), Ok(Level::Hard));
        assert_eq!("3".parse::<Level>(), Ok(Level::Medium));
        assert!("godlike".parse::<Level>().is_err());
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_tier_table() {
        let joke = Profile::from_level(Level::Joke);
        assert_eq!(joke.mcts_visits, 5);
        assert_eq!(joke.minimax_depth, 0);
        assert_eq!(joke.ladder_depth, 0);

        let crazy = Profile::from_level(Level::Crazy);
        assert!(crazy.minimax_ladder && crazy.can_resign && crazy.anti_ladder_nearest);
        assert_eq!(crazy.ladder_depth, 10);

        let demon = Profile::from_level(Level::Demon);
        assert_eq!(demon.minimax_depth, 2);
        assert!(!demon.minimax_ladder);

        for level in Level::ALL {
            assert_eq!(Profile::from_level(level).capture_prob, 1.0);
        }
    }
}
