//! Play-again session loop.

use crate::config::{PlayerKind, SessionConfig};
use crate::console::{ConsolePlayer, SharedConsole};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictac_engine::{Game, Outcome, SimpleStupidity, Strategy, Token};
use tracing::{info, instrument};

/// The only answer that starts another game.
pub const PLAY_AGAIN: &str = "yes";

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct SessionSummary {
    /// Games played to completion.
    games: u32,
    /// Games won by `X`.
    x_wins: u32,
    /// Games won by `O`.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Token::X) => self.x_wins += 1,
            Outcome::Won(Token::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Drives games on one console until the players stop answering `yes`.
pub struct Session<R, W> {
    config: SessionConfig,
    console: SharedConsole<R, W>,
}

impl<R: BufRead + 'static, W: Write + 'static> Session<R, W> {
    /// Creates a session.
    pub fn new(config: SessionConfig, console: SharedConsole<R, W>) -> Self {
        Self { config, console }
    }

    /// Runs games until the answer to "play again" is not exactly `yes`.
    #[instrument(
        skip(self),
        fields(player_x = %self.config.player_x(), player_o = %self.config.player_o())
    )]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let outcome = self.play_one()?;
            summary.record(outcome);

            self.write("Do you want to play again?\n")?;
            let answer = self
                .console
                .borrow_mut()
                .next_token()
                .context("Failed to read answer")?;
            info!(?answer, "Play again?");

            if answer.as_deref() != Some(PLAY_AGAIN) {
                break;
            }
        }

        info!(?summary, "Session finished");
        Ok(summary)
    }

    #[instrument(skip(self))]
    fn play_one(&mut self) -> Result<Outcome> {
        let mut game = Game::with_diagnostics(
            self.strategy(*self.config.player_x(), Token::X),
            self.strategy(*self.config.player_o(), Token::O),
            *self.config.diagnostics(),
        );
        let outcome = game.play().context("Game aborted")?;

        match outcome {
            Outcome::Draw => self.write("The game is tied.\n")?,
            Outcome::Won(token) => {
                self.write(&format!("This game's winner is: {}\n", token))?;
                self.write(&format!("Ending board: \n{}\n", game.board()))?;
            }
        }
        Ok(outcome)
    }

    fn strategy(&self, kind: PlayerKind, token: Token) -> Box<dyn Strategy> {
        match kind {
            PlayerKind::Human => Box::new(ConsolePlayer::new(
                format!("Player {}", token),
                self.console.clone(),
            )),
            PlayerKind::Stupid => Box::new(SimpleStupidity::new()),
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        self.console
            .borrow_mut()
            .write(text)
            .context("Failed to write to console")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use std::io::Cursor;

    fn run(input: &str, config: SessionConfig) -> (Result<SessionSummary>, String) {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).shared();
        let result = Session::new(config, console.clone()).run();
        let text = String::from_utf8(console.borrow().output().clone()).unwrap();
        (result, text)
    }

    const X_WINS: &str = "1 4 2 5 3\n";

    #[test]
    fn test_single_game_then_no() {
        let (result, text) = run(&format!("{X_WINS}no\n"), SessionConfig::default());
        let summary = result.unwrap();
        assert_eq!(*summary.games(), 1);
        assert_eq!(*summary.x_wins(), 1);
        assert!(text.contains("This game's winner is: X\n"));
        assert!(text.contains("Ending board: \nX|X|X\n-----\nO|O|6\n-----\n7|8|9\n\n"));
        assert!(text.ends_with("Do you want to play again?\n"));
    }

    #[test]
    fn test_yes_replays_exactly() {
        let input = format!("{X_WINS}yes\n{X_WINS}Yes\n");
        let (result, _) = run(&input, SessionConfig::default());
        assert_eq!(*result.unwrap().games(), 2);
    }

    #[test]
    fn test_short_answer_stops() {
        let (result, _) = run(&format!("{X_WINS}y\n{X_WINS}"), SessionConfig::default());
        assert_eq!(*result.unwrap().games(), 1);
    }

    #[test]
    fn test_end_of_input_after_game_stops() {
        let (result, _) = run(X_WINS, SessionConfig::default());
        assert_eq!(*result.unwrap().games(), 1);
    }

    #[test]
    fn test_draw_is_reported() {
        let (result, text) = run("1 2 3 5 4 6 8 7 9\nno\n", SessionConfig::default());
        assert_eq!(*result.unwrap().draws(), 1);
        assert!(text.contains("The game is tied.\n"));
        assert!(!text.contains("winner"));
    }

    #[test]
    fn test_stupid_player_aborts_session() {
        let config = SessionConfig::new(PlayerKind::Human, PlayerKind::Stupid, Default::default());
        let (result, _) = run("5\n", config);
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("not yet supported"));
    }

    #[test]
    fn test_input_running_dry_mid_game_is_an_error() {
        let (result, _) = run("1 2\n", SessionConfig::default());
        assert!(result.is_err());
    }
}
