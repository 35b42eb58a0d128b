//! Strategy replaying a fixed list of moves.

use crate::{Board, Move, PlayerError, PlayerErrorKind, Strategy, Token};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Plays moves from a queue, one per proposal.
///
/// Rejected proposals simply consume the next queued move, so a script may
/// contain illegal moves followed by their corrections. An exhausted queue
/// reports [`PlayerErrorKind::InputClosed`].
#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedStrategy {
    /// Creates a scripted strategy.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Creates a scripted strategy from 1-based board spaces.
    ///
    /// Spaces at the bottom of the `i32` range stay off the board.
    pub fn from_spaces(name: impl Into<String>, spaces: impl IntoIterator<Item = i32>) -> Self {
        let moves = spaces
            .into_iter()
            .map(|s| Move::from_index(s.saturating_sub(1)));
        Self::new(name, moves)
    }

    /// Moves not played yet.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    #[instrument(skip(self), fields(name = %self.name))]
    fn next_move(&mut self) -> Result<Move, PlayerError> {
        let mv = self
            .moves
            .pop_front()
            .ok_or_else(|| PlayerError::new(PlayerErrorKind::InputClosed))?;
        debug!(%mv, remaining = self.moves.len(), "Scripted move");
        Ok(mv)
    }
}

impl Strategy for ScriptedStrategy {
    fn first_move(&mut self, _board: &Board, _token: Token) -> Result<Move, PlayerError> {
        self.next_move()
    }

    fn retry_move(&mut self, _board: &Board, _token: Token) -> Result<Move, PlayerError> {
        self.next_move()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_spaces_are_one_based() {
        let mut script = ScriptedStrategy::from_spaces("script", [1, 9]);
        let board = Board::new();
        assert_eq!(script.first_move(&board, Token::X).unwrap(), Move::from_coords(0, 0));
        assert_eq!(script.first_move(&board, Token::X).unwrap(), Move::from_coords(2, 2));
    }

    #[test]
    fn test_correction_follows_illegal_move() {
        let script = ScriptedStrategy::from_spaces("script", [10, 0, 5]);
        let mut player = Player::new(Token::X, Box::new(script));
        assert_eq!(player.make_move(&Board::new()).unwrap(), Move::from_index(4));
    }

    #[test]
    fn test_extreme_spaces_are_rejected() {
        let script = ScriptedStrategy::from_spaces("script", [i32::MIN, i32::MAX, 5]);
        assert_eq!(script.remaining(), 3);

        let mut player = Player::new(Token::O, Box::new(script));
        assert_eq!(player.make_move(&Board::new()).unwrap(), Move::from_index(4));
    }

    #[test]
    fn test_exhausted_script_reports_closed_input() {
        let mut script = ScriptedStrategy::new("empty", []);
        let err = script.first_move(&Board::new(), Token::O).unwrap_err();
        assert_eq!(err.kind, PlayerErrorKind::InputClosed);
        assert_eq!(script.remaining(), 0);
    }
}
