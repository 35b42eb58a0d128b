//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Token a player claims cells with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Token {
    /// Token `X` (seat 0, moves first).
    #[display("X")]
    X,
    /// Token `O` (seat 1).
    #[display("O")]
    O,
}

impl Token {
    /// Returns the other token.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    /// Character drawn on the board for this token.
    pub fn as_char(self) -> char {
        match self {
            Token::X => 'X',
            Token::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a token.
    Occupied(Token),
}

impl Cell {
    /// Returns the occupying token, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        Cell::Occupied(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for token in Token::iter() {
            assert_ne!(token, token.opponent());
            assert_eq!(token, token.opponent().opponent());
        }
    }

    #[test]
    fn test_display_matches_char() {
        for token in Token::iter() {
            assert_eq!(token.to_string(), token.as_char().to_string());
        }
    }

    #[test]
    fn test_cell_token() {
        assert_eq!(Cell::Empty.token(), None);
        assert_eq!(Cell::from(Token::O).token(), Some(Token::O));
        assert!(Cell::default().is_empty());
    }
}
