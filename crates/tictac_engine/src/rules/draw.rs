//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
