//! The 3x3 grid.

use crate::rules;
use crate::{Cell, Diagnostics, Move, SIDE, Token};
use tracing::{debug, instrument};

const CELLS_PER_SIDE: usize = SIDE as usize;

/// 3x3 tic-tac-toe board.
///
/// The board knows nothing about players or turns. Writing is unchecked
/// ([`Board::play_move`]); legality is a separate predicate
/// ([`Board::is_valid_move`]) so players can probe candidates before
/// committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed `[x][y]`.
    cells: [[Cell; CELLS_PER_SIDE]; CELLS_PER_SIDE],
    diagnostics: Diagnostics,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::with_diagnostics(Diagnostics::quiet())
    }

    /// Creates a new empty board with diagnostics switched as given.
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            cells: [[Cell::Empty; CELLS_PER_SIDE]; CELLS_PER_SIDE],
            diagnostics,
        }
    }

    /// Writes `token` into the cell named by `mv`.
    ///
    /// The move must already be legal. This is only checked in debug builds;
    /// out-of-range moves panic.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, mv: Move, token: Token) {
        debug_assert!(self.is_valid_move(mv), "play_move called with illegal move {mv}");
        self.cells[mv.x() as usize][mv.y() as usize] = Cell::Occupied(token);
    }

    /// Reads the cell named by `mv`.
    ///
    /// The caller must range-check first; use [`Board::get`] otherwise.
    pub fn check_space(&self, mv: Move) -> Cell {
        self.cells[mv.x() as usize][mv.y() as usize]
    }

    /// Reads the cell named by `mv`, `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.is_in_range().then(|| self.check_space(mv))
    }

    /// A move is legal iff it is on the board and the cell is empty.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        let in_range = mv.is_in_range();
        if *self.diagnostics.moves() {
            debug!(%mv, in_range, "Checking validity");
            if in_range {
                debug!(%mv, cell = ?self.check_space(mv), "Found at that space");
            }
        }

        let valid = in_range && self.check_space(mv).is_empty();

        if *self.diagnostics.moves() {
            debug!(%mv, valid, "Move verdict");
        }
        valid
    }

    /// Whether any row, column or diagonal holds three identical tokens.
    pub fn is_victory(&self) -> bool {
        self.winner().is_some()
    }

    /// The token owning a victory line, if any.
    pub fn winner(&self) -> Option<Token> {
        rules::check_winner(self)
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Cells in row-major order (linear index 0-8).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..SIDE * SIDE).map(|i| self.check_space(Move::from_index(i)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders empty cells as their 1-based space label and occupied cells as
/// their token.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..SIDE {
            for x in 0..SIDE {
                let mv = Move::from_coords(x, y);
                let cell = self.check_space(mv);
                if *self.diagnostics.board() {
                    debug!(x, y, ?cell, "Board space");
                }
                match cell {
                    Cell::Occupied(token) => write!(f, "{}", token)?,
                    Cell::Empty => write!(f, "{}", y * SIDE + x + 1)?,
                }
                if x < SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if y < SIDE - 1 {
                writeln!(f, "-----")?;
            }
        }
        Ok(())
    }
}
