//! go-tactics: a tactical Go bot.
//!
//! ## Usage
//!
//! - `go-tactics` - play a short self-play demo
//! - `go-tactics gtp` - start a GTP server for GUI integration
//! - `go-tactics demo --level hard --seed 7` - reproducible self-play game

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flexi_logger::Logger;
use log::info;

use go_tactics::board::Color;
use go_tactics::bot::{Bot, Move};
use go_tactics::constants::MAX_GAME_LEN;
use go_tactics::gtp::GtpEngine;
use go_tactics::profile::{Level, Profile};

/// go-tactics: a tactical Go bot with capture, ladder, minimax and
/// Monte-Carlo stages
#[derive(Parser)]
#[command(name = "go-tactics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp(BotOpts),
    /// Let the bot play a game against itself
    Demo(BotOpts),
}

#[derive(Args, Default)]
struct BotOpts {
    /// Strength level: custom, joke, easy, medium, hard, crazy, demon or 0-6
    #[arg(long, default_value = "medium")]
    level: Level,
    /// Seed for the bot's random source
    #[arg(long)]
    seed: Option<u64>,
    /// Color the bot plays (demo: the color that moves first)
    #[arg(long, default_value = "black")]
    color: Color,
    /// Playouts per Monte-Carlo candidate
    #[arg(long)]
    mcts_visits: Option<usize>,
    /// Ladder reading depth
    #[arg(long)]
    ladder_depth: Option<usize>,
    /// Ladder reading depth when looking for enemy ladders
    #[arg(long)]
    anti_ladder_depth: Option<usize>,
    /// Minimax plies
    #[arg(long)]
    minimax_depth: Option<usize>,
    /// Prefer ladder breakers next to own stones
    #[arg(long)]
    anti_ladder_nearest: Option<bool>,
    /// Allow the bot to resign
    #[arg(long)]
    can_resign: Option<bool>,
    /// Read ladders inside minimax
    #[arg(long)]
    minimax_ladder: Option<bool>,
}

impl BotOpts {
    /// The level's profile with any explicit flags applied on top.
    fn profile(&self) -> Profile {
        let mut profile = Profile::from_level(self.level);
        if let Some(v) = self.mcts_visits {
            profile.mcts_visits = v;
        }
        if let Some(v) = self.ladder_depth {
            profile.ladder_depth = v;
        }
        if let Some(v) = self.anti_ladder_depth {
            profile.anti_ladder_depth = v;
        }
        if let Some(v) = self.minimax_depth {
            profile.minimax_depth = v;
        }
        if let Some(v) = self.anti_ladder_nearest {
            profile.anti_ladder_nearest = v;
        }
        if let Some(v) = self.can_resign {
            profile.can_resign = v;
        }
        if let Some(v) = self.minimax_ladder {
            profile.minimax_ladder = v;
        }
        profile
    }

    fn bot(&self, color: Color) -> Bot {
        let bot = Bot::with_profile(self.profile(), color);
        match self.seed {
            Some(seed) => bot.with_seed(seed),
            None => bot,
        }
    }
}

fn main() -> Result<()> {
    Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format(flexi_logger::colored_default_format)
        .start()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp(opts)) => {
            info!("starting GTP server at level {}", opts.level);
            let mut engine = GtpEngine::with_bot(opts.bot(opts.color));
            engine.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Demo(opts)) => run_demo(&opts),
        None => run_demo(&BotOpts {
            level: Level::Easy,
            ..BotOpts::default()
        }),
    }
    Ok(())
}

fn run_demo(opts: &BotOpts) {
    println!("go-tactics self-play at level {}\n", opts.level);

    let mut black = opts.bot(Color::Black);
    let mut white = match opts.seed {
        // Keep the two sides from drawing the same random numbers.
        Some(seed) => opts.bot(Color::White).with_seed(seed.wrapping_add(1)),
        None => opts.bot(Color::White),
    };

    let mut to_move = opts.color;
    let mut passes = 0;
    for turn in 1..=MAX_GAME_LEN {
        let (mover, other) = match to_move {
            Color::Black => (&mut black, &mut white),
            Color::White => (&mut white, &mut black),
        };

        let mv = mover.get_move();
        println!("{turn:>3}. {to_move} {mv}");
        match mv {
            Move::Resign { .. } => {
                println!("\n{to_move} resigns, {} wins", !to_move);
                break;
            }
            Move::Pass { .. } => {
                passes += 1;
                if passes == 2 {
                    println!("\nboth sides passed");
                    break;
                }
            }
            Move::Place { .. } => passes = 0,
        }

        mover.play(mv);
        other.play(mv);
        to_move = !to_move;
    }

    println!("\n{}", black.board());
}
