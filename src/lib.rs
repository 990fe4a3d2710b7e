//! go-tactics: a Go rules engine and a tactical bot.
//!
//! The board tracks stones as groups with their liberties and resolves
//! captures and suicide on every placement. On top of it the bot runs a
//! cascade of analyzers: immediate captures, saving groups in atari, ladders,
//! a shallow minimax and finally Monte-Carlo playouts.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`point`] - Coordinates and point sets
//! - [`group`] - Connected stones and their liberties
//! - [`board`] - Placement, capture and suicide rules
//! - [`tactics`] - Atari, capture, eye and legality analyzers
//! - [`ladder`] - Ladder reading
//! - [`policy`] - Candidate moves near existing play
//! - [`minimax`] - Shallow tactical search
//! - [`playout`] - Random game simulation
//! - [`mcts`] - Monte-Carlo move evaluation
//! - [`profile`] - Strength levels
//! - [`bot`] - The move-selection cascade
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_tactics::board::Color;
//! use go_tactics::bot::{Bot, Move};
//! use go_tactics::point::parse_coord;
//! use go_tactics::profile::Level;
//!
//! let mut bot = Bot::new(Level::Easy, Color::Black).with_seed(1);
//! bot.play(Move::play_at(Color::White, parse_coord("A1").unwrap()));
//! bot.play(Move::play_at(Color::Black, parse_coord("A2").unwrap()));
//!
//! // White A1 is in atari, so the bot takes it.
//! assert_eq!(bot.get_move().to_string(), "B1");
//! ```

pub mod board;
pub mod bot;
pub mod constants;
pub mod group;
pub mod gtp;
pub mod ladder;
pub mod mcts;
pub mod minimax;
pub mod playout;
pub mod point;
pub mod policy;
pub mod profile;
pub mod tactics;
