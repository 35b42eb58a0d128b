//! Move coordinates.
//!
//! A move only names a cell. It carries no validity guarantee: out-of-range
//! coordinates are legal to construct and are rejected later by
//! [`Board::is_valid_move`](crate::Board::is_valid_move).

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Side length of the board.
pub const SIDE: i32 = 3;

/// A coordinate pair identifying one cell.
///
/// `x` is the column and `y` the row, both counted from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{{ {}, {} }}", x, y)]
pub struct Move {
    x: i32,
    y: i32,
}

impl Move {
    /// Creates a move from a linear index (row-major, 0-8).
    ///
    /// No bounds check is performed. Negative indices land outside the board
    /// instead of aliasing an in-range cell.
    pub fn from_index(index: i32) -> Self {
        let mv = Self {
            x: index.rem_euclid(SIDE),
            y: index.div_euclid(SIDE),
        };
        trace!(index, %mv, "Move from index");
        mv
    }

    /// Creates a move from explicit coordinates.
    pub fn from_coords(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Checks if both coordinates lie on the board.
    pub fn is_in_range(&self) -> bool {
        (0..SIDE).contains(&self.x) && (0..SIDE).contains(&self.y)
    }

    /// Linear index `y * 3 + x`, if the move is on the board.
    pub fn index(&self) -> Option<usize> {
        self.is_in_range().then(|| (self.y * SIDE + self.x) as usize)
    }
}
