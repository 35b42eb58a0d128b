//! Placeholder for a future automated opponent.

use crate::{Board, Move, PlayerError, PlayerErrorKind, Strategy, Token};
use tracing::{error, instrument};

/// "Artificial Simple Stupidity", the counterpart of artificial intelligence.
///
/// Declared but not implemented: every request for a move fails with
/// [`PlayerErrorKind::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct SimpleStupidity;

impl SimpleStupidity {
    /// Creates the placeholder.
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    fn refuse(&self, token: Token) -> PlayerError {
        error!(%token, "Simple stupidity asked for a move");
        PlayerError::new(PlayerErrorKind::Unsupported(
            "simple stupidity cannot choose moves yet".to_string(),
        ))
    }
}

impl Strategy for SimpleStupidity {
    fn first_move(&mut self, _board: &Board, token: Token) -> Result<Move, PlayerError> {
        Err(self.refuse(token))
    }

    fn retry_move(&mut self, _board: &Board, token: Token) -> Result<Move, PlayerError> {
        Err(self.refuse(token))
    }

    fn name(&self) -> &str {
        "Simple Stupidity"
    }
}
