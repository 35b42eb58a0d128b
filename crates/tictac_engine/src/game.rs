//! Turn loop for one game.

use crate::{Board, Diagnostics, Move, Player, PlayerError, Strategy, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of cells; the game is over at the latest after this many moves.
pub const MAX_MOVES: u32 = 9;

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the player at this seat index.
    Turn(usize),
    /// A victory line was completed by this token.
    Won(Token),
    /// The board filled up without a victory line.
    Draw,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Winner's token.
    #[display("{} wins", _0)]
    Won(Token),
    /// Nobody won.
    #[display("draw")]
    Draw,
}

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Token written.
    pub token: Token,
    /// Cell written to.
    pub mv: Move,
}

/// Serializable summary of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameRecord {
    /// Moves in the order they were applied.
    history: Vec<Ply>,
    /// `None` while the game is still running.
    outcome: Option<Outcome>,
}

impl GameRecord {
    /// Renders the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single game: one board, two players, alternating turns.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    moves: u32,
    status: GameStatus,
    history: Vec<Ply>,
}

impl Game {
    /// Creates a game; `first` plays `X` and moves first, `second` plays `O`.
    pub fn new(first: Box<dyn Strategy>, second: Box<dyn Strategy>) -> Self {
        Self::with_diagnostics(first, second, Diagnostics::quiet())
    }

    /// Creates a game with diagnostics switched for the board and players.
    #[instrument(skip(first, second), fields(player_x = %first.name(), player_o = %second.name()))]
    pub fn with_diagnostics(
        first: Box<dyn Strategy>,
        second: Box<dyn Strategy>,
        diagnostics: Diagnostics,
    ) -> Self {
        info!("Creating game");
        let players = [
            Player::new(Token::X, first).with_diagnostics(diagnostics),
            Player::new(Token::O, second).with_diagnostics(diagnostics),
        ];
        // The index is toggled before every move, so seat 0 moves first.
        let current = 1;
        Self {
            board: Board::with_diagnostics(diagnostics),
            players,
            current,
            moves: 0,
            status: GameStatus::Turn(next_seat(current)),
            history: Vec::new(),
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player at seat 0 or 1.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Moves applied so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current state of the loop.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applied moves in order.
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// The final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Turn(_) => None,
            GameStatus::Won(token) => Some(Outcome::Won(token)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Snapshot of the history and outcome.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            history: self.history.clone(),
            outcome: self.outcome(),
        }
    }

    /// Plays one turn.
    ///
    /// Once the game is over this returns the final status without asking
    /// anybody for a move.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn step(&mut self) -> Result<GameStatus, PlayerError> {
        if self.outcome().is_some() {
            return Ok(self.status);
        }

        let seat = next_seat(self.current);
        let player = &mut self.players[seat];
        let token = player.token();

        debug!(seat, %token, "Requesting move");
        let mv = player.make_move(&self.board)?;
        self.current = seat;

        debug_assert!(self.board.is_valid_move(mv));
        self.board.play_move(mv, token);
        self.history.push(Ply { token, mv });
        self.moves += 1;
        info!(%token, %mv, moves = self.moves, "Move applied");

        // Victory is checked first so a ninth move completing a line wins.
        self.status = if self.board.is_victory() {
            GameStatus::Won(token)
        } else if self.moves == MAX_MOVES {
            GameStatus::Draw
        } else {
            GameStatus::Turn(next_seat(self.current))
        };
        Ok(self.status)
    }

    /// Plays turns until the game is won or drawn.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Outcome, PlayerError> {
        loop {
            self.step()?;
            if let Some(outcome) = self.outcome() {
                info!(%outcome, moves = self.moves, "Game over");
                return Ok(outcome);
            }
        }
    }
}

/// Seat that moves after `current`.
fn next_seat(current: usize) -> usize {
    1 - current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerErrorKind, ScriptedStrategy, SimpleStupidity};

    fn scripted(x: &[i32], o: &[i32]) -> Game {
        Game::new(
            Box::new(ScriptedStrategy::from_spaces("x", x.iter().copied())),
            Box::new(ScriptedStrategy::from_spaces("o", o.iter().copied())),
        )
    }

    #[test]
    fn test_new_game_waits_for_seat_zero() {
        let game = scripted(&[], &[]);
        assert_eq!(game.status(), GameStatus::Turn(0));
        assert_eq!(game.player(0).map(Player::token), Some(Token::X));
        assert_eq!(game.player(1).map(Player::token), Some(Token::O));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_step_alternates_seats() {
        let mut game = scripted(&[5], &[1]);
        assert_eq!(game.step().unwrap(), GameStatus::Turn(1));
        assert_eq!(game.history()[0].token, Token::X);
        assert_eq!(game.step().unwrap(), GameStatus::Turn(0));
        assert_eq!(game.history()[1].token, Token::O);
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_step_after_game_over_is_inert() {
        let mut game = scripted(&[1, 2, 3], &[4, 5]);
        assert_eq!(game.play().unwrap(), Outcome::Won(Token::X));
        assert_eq!(game.step().unwrap(), GameStatus::Won(Token::X));
        assert_eq!(game.moves(), 5);
    }

    #[test]
    fn test_player_error_stops_the_game() {
        let mut game = Game::new(
            Box::new(ScriptedStrategy::from_spaces("x", [5])),
            Box::new(SimpleStupidity::new()),
        );
        let err = game.play().unwrap_err();
        assert!(matches!(err.kind, PlayerErrorKind::Unsupported(_)));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.status(), GameStatus::Turn(1));
    }

    #[test]
    fn test_record_serializes() {
        let mut game = scripted(&[1, 2, 3], &[4, 5]);
        game.play().unwrap();
        let json = game.record().to_json().unwrap();
        let parsed: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, game.record());
        assert_eq!(parsed.history().len(), 5);
    }
}
