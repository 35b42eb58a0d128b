//! Player error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while asking a player for a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PlayerErrorKind {
    /// Input could not be read as a board space.
    #[display("Malformed input: {:?}", _0)]
    MalformedInput(String),

    /// The input source ran dry.
    #[display("Input closed")]
    InputClosed,

    /// Reading or writing failed.
    #[display("I/O failure: {}", _0)]
    Io(String),

    /// The strategy cannot produce moves.
    #[display("Strategy not yet supported: {}", _0)]
    Unsupported(String),
}

/// Player error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Player error: {} at {}:{}", kind, file, line)]
pub struct PlayerError {
    /// Error kind.
    pub kind: PlayerErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: PlayerErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Whether the failed attempt should be treated like an illegal move.
    pub fn is_rejected_attempt(&self) -> bool {
        matches!(self.kind, PlayerErrorKind::MalformedInput(_))
    }
}

impl From<std::io::Error> for PlayerError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(PlayerErrorKind::Io(err.to_string()))
    }
}
