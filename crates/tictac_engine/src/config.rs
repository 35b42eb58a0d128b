//! Diagnostic switches for the engine.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which diagnostic events the engine emits.
///
/// Events are logged at `debug` level, so the tracing filter must also let
/// them through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnostics {
    /// Trace move proposals and legality checks.
    moves: bool,
    /// Trace every cell while rendering the board.
    board: bool,
}

impl Diagnostics {
    /// Creates a diagnostics configuration.
    pub fn new(moves: bool, board: bool) -> Self {
        Self { moves, board }
    }

    /// Everything switched off.
    pub fn quiet() -> Self {
        Self::default()
    }
}
