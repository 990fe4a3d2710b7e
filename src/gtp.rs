//! Go Text Protocol (GTP) front end.
//!
//! Wraps a [`Bot`] so the engine can be driven by GUIs such as Sabaki or
//! GoGui. Besides the standard administrative commands it understands
//! `set_bot_level`, which swaps the bot's strength profile mid-session.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`, `quit`
//! - `boardsize <size>` - only the compiled board size is accepted
//! - `clear_board`
//! - `komi <value>` - accepted and ignored, there is no scoring
//! - `play <color> <vertex>` - vertex may be `pass`
//! - `genmove <color>` - answers a vertex, `pass` or `resign`
//! - `set_bot_level <level> [key=value ...]` - level name or id 0-6, with
//!   optional profile overrides
//! - `showboard`
//!
//! ## Example
//!
//! ```
//! use go_tactics::gtp::GtpEngine;
//! use go_tactics::profile::Level;
//!
//! let mut engine = GtpEngine::new(Level::Joke);
//! let input = b"1 play black E5\n2 showboard\nquit\n";
//! let mut output = Vec::new();
//! engine.run(&input[..], &mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().starts_with("=1"));
//! ```

use std::io::{self, BufRead, Write};

use log::info;
use thiserror::Error;

use crate::board::{Color, PlaceError};
use crate::bot::{Bot, Move};
use crate::constants::N;
use crate::point::parse_coord;
use crate::profile::{Level, Profile};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "set_bot_level",
    "showboard",
    "version",
];

/// A command that could not be carried out. Rendered as a `?` response.
#[derive(Debug, Error)]
pub enum GtpError {
    #[error("missing argument")]
    MissingArgument,
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid coordinate: {0}")]
    InvalidVertex(String),
    #[error("unacceptable size {0} (expected {size})", size = N)]
    UnacceptableSize(String),
    #[error("invalid komi: {0}")]
    InvalidKomi(String),
    #[error("unknown bot level: {0}")]
    InvalidLevel(String),
    #[error("invalid profile setting: {0}")]
    InvalidSetting(String),
    #[error(transparent)]
    IllegalMove(#[from] PlaceError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub struct GtpEngine {
    bot: Bot,
}

impl GtpEngine {
    pub fn new(level: Level) -> Self {
        Self::with_bot(Bot::new(level, Color::Black))
    }

    pub fn with_bot(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (prefix, message) = match self.execute(&command, args) {
                Ok(message) => ('=', message),
                Err(err) => ('?', err.to_string()),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute one command, returning the response body.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String, GtpError> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let cmd = arg(args, 0)?.to_lowercase();
                Ok(KNOWN_COMMANDS.contains(&cmd.as_str()).to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let size = arg(args, 0)?;
                match size.parse::<usize>() {
                    Ok(n) if n == N => Ok(String::new()),
                    _ => Err(GtpError::UnacceptableSize(size.to_string())),
                }
            }

            "clear_board" => {
                self.bot.board_mut().clear();
                Ok(String::new())
            }

            "komi" => {
                let komi = arg(args, 0)?;
                komi.parse::<f32>()
                    .map(|_| String::new())
                    .map_err(|_| GtpError::InvalidKomi(komi.to_string()))
            }

            "play" => {
                let color = parse_color(arg(args, 0)?)?;
                let vertex = arg(args, 1)?;
                if vertex.eq_ignore_ascii_case("pass") {
                    return Ok(String::new());
                }
                let pt = parse_coord(vertex)
                    .ok_or_else(|| GtpError::InvalidVertex(vertex.to_string()))?;
                self.bot.board_mut().try_place(color, pt)?;
                Ok(String::new())
            }

            "genmove" => {
                let color = parse_color(arg(args, 0)?)?;
                self.bot.set_color(color);
                let mv = self.bot.get_move();
                if let Move::Place { color, point } = mv {
                    self.bot.board_mut().try_place(color, point)?;
                }
                Ok(mv.to_string())
            }

            "set_bot_level" => {
                let level_arg = arg(args, 0)?;
                let level: Level = level_arg
                    .parse()
                    .map_err(|_| GtpError::InvalidLevel(level_arg.to_string()))?;
                let mut profile = Profile::from_level(level);
                for setting in &args[1..] {
                    apply_setting(&mut profile, setting)?;
                }
                info!("bot level set to {level}: {profile:?}");
                self.bot.set_profile(profile);
                Ok(String::new())
            }

            "showboard" => Ok(format!("\n{}", self.bot.board())),

            _ => Err(GtpError::UnknownCommand(command.to_string())),
        }
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> Result<&'a str, GtpError> {
    args.get(index).copied().ok_or(GtpError::MissingArgument)
}

fn parse_color(s: &str) -> Result<Color, GtpError> {
    s.parse().map_err(|_| GtpError::InvalidColor(s.to_string()))
}

/// Apply one `key=value` override to `profile`.
fn apply_setting(profile: &mut Profile, setting: &str) -> Result<(), GtpError> {
    let invalid = || GtpError::InvalidSetting(setting.to_string());
    let (key, value) = setting.split_once('=').ok_or_else(invalid)?;

    let count = || value.parse::<usize>().map_err(|_| invalid());
    let flag = || value.parse::<bool>().map_err(|_| invalid());
    match key {
        "mcts_visits" => profile.mcts_visits = count()?,
        "ladder_depth" => profile.ladder_depth = count()?,
        "anti_ladder_depth" => profile.anti_ladder_depth = count()?,
        "minimax_depth" => profile.minimax_depth = count()?,
        "anti_ladder_nearest" => profile.anti_ladder_nearest = flag()?,
        "can_resign" => profile.can_resign = flag()?,
        "minimax_ladder" => profile.minimax_ladder = flag()?,
        "capture_prob" => {
            profile.capture_prob = value
                .parse::<f64>()
                .ok()
                .filter(|p| (0.0..=1.0).contains(p))
                .ok_or_else(invalid)?
        }
        _ => return Err(invalid()),
    }
    Ok(())
}
