//! Command-line interface for tictac.

use crate::config::PlayerKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games until you stop answering "yes"
    Play(PlayArgs),

    /// Play a game from a fixed list of board spaces
    Replay {
        /// Board spaces 1-9, dealt alternately to X and O
        #[arg(required = true, allow_negative_numbers = true)]
        spaces: Vec<i32>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,

        /// Trace move proposals and legality checks
        #[arg(long)]
        trace_moves: bool,
    },
}

/// Options for interactive play
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (default: tictac.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays X
    #[arg(long, value_enum)]
    pub player_x: Option<PlayerKind>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub player_o: Option<PlayerKind>,

    /// Trace move proposals and legality checks
    #[arg(long)]
    pub trace_moves: bool,

    /// Trace every cell while drawing the board
    #[arg(long)]
    pub trace_board: bool,
}
