//! Player capability and the move retry protocol.

use crate::{Board, Diagnostics, Move, PlayerError, Token};
use tracing::{debug, instrument, warn};

/// Trait for strategies that propose moves.
///
/// The engine never inspects which strategy it holds. A strategy only
/// proposes; [`Player::make_move`] validates and keeps asking through
/// [`Strategy::retry_move`] until a proposal is legal. A strategy that never
/// converges on a board with an empty cell hangs the game.
pub trait Strategy {
    /// Proposes a move for `token` on `board`.
    fn first_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError>;

    /// Proposes a move after the previous proposal was rejected.
    fn retry_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// A seat at the table: a token plus the strategy choosing its moves.
///
/// Players are exclusively owned by one game and cannot be cloned.
pub struct Player {
    token: Token,
    strategy: Box<dyn Strategy>,
    diagnostics: Diagnostics,
}

impl Player {
    /// Creates a player.
    pub fn new(token: Token, strategy: Box<dyn Strategy>) -> Self {
        Self {
            token,
            strategy,
            diagnostics: Diagnostics::quiet(),
        }
    }

    /// Switches diagnostics for this player.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// The token this player claims cells with.
    pub fn token(&self) -> Token {
        self.token
    }

    /// The strategy's display name.
    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// Asks the strategy for moves until one is legal on `board`.
    ///
    /// Malformed proposals count as rejected attempts. Every other error is
    /// returned as is.
    #[instrument(skip(self, board), fields(token = %self.token, player = %self.strategy.name()))]
    pub fn make_move(&mut self, board: &Board) -> Result<Move, PlayerError> {
        let mut proposal = self.strategy.first_move(board, self.token);
        let mut attempts = 1u32;

        loop {
            match proposal {
                Ok(mv) if board.is_valid_move(mv) => {
                    if *self.diagnostics.moves() {
                        debug!(%mv, attempts, "Made this move");
                    }
                    debug_assert!(board.is_valid_move(mv));
                    return Ok(mv);
                }
                Ok(mv) => {
                    debug!(%mv, attempts, "Rejected illegal move");
                }
                Err(e) if e.is_rejected_attempt() => {
                    warn!(error = %e, attempts, "Rejected malformed move");
                }
                Err(e) => return Err(e),
            }

            attempts += 1;
            proposal = self.strategy.retry_move(board, self.token);
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("token", &self.token)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
