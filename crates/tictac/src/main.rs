//! Tictac - console tic-tac-toe
//!
//! Two players share one terminal and take turns typing board spaces.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tictac::cli::{Cli, Command, PlayArgs};
use tictac::{Console, Session, SessionConfig};
use tictac_engine::Diagnostics;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn,tictac=info";
const DIAGNOSTICS_FILTER: &str = "warn,tictac=info,tictac_engine=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            let config = SessionConfig::load(args.config.as_deref())?.with_overrides(
                args.player_x,
                args.player_o,
                args.trace_moves,
                args.trace_board,
            );
            initialize_tracing(config.diagnostics());
            run_play(config)
        }
        Command::Replay {
            spaces,
            json,
            trace_moves,
        } => {
            let diagnostics = Diagnostics::new(trace_moves, false);
            initialize_tracing(&diagnostics);
            run_replay(spaces, json, diagnostics)
        }
    }
}

/// Run interactive games on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: SessionConfig) -> Result<()> {
    info!(?config, "Starting session");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout()).shared();
    let summary = Session::new(config, console).run()?;

    info!(
        games = summary.games(),
        x_wins = summary.x_wins(),
        o_wins = summary.o_wins(),
        draws = summary.draws(),
        "Goodbye"
    );
    Ok(())
}

/// Run a scripted game and print its result
#[instrument(skip(diagnostics))]
fn run_replay(spaces: Vec<i32>, json: bool, diagnostics: Diagnostics) -> Result<()> {
    let record = tictac::replay(&spaces, diagnostics)?;

    let mut out = std::io::stdout().lock();
    if json {
        tictac::write_json(&mut out, &record)?;
    } else {
        tictac::write_report(&mut out, &record)?;
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr so they never mix with the board on stdout.
///
/// Engine diagnostics are emitted at `debug`, so switching any of them on
/// raises the default engine level.
fn initialize_tracing(diagnostics: &Diagnostics) {
    let default_filter = if *diagnostics.moves() || *diagnostics.board() {
        DIAGNOSTICS_FILTER
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
