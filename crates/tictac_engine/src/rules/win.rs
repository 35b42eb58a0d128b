//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Move, Token};
use tracing::instrument;

/// The 8 victory lines as `(x, y)` triples.
pub const LINES: [[(i32, i32); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns the token that fills a whole line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Token> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(x, y)| board.check_space(Move::from_coords(x, y)));
        match a {
            Cell::Occupied(token) if a == b && b == c => Some(token),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(token: Token, cells: &[(i32, i32)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in cells {
            board.play_move(Move::from_coords(x, y), token);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_on_its_own() {
        for line in LINES {
            let board = board_with(Token::O, &line);
            assert_eq!(check_winner(&board), Some(Token::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Token::X, &[(0, 0), (1, 0)]);
        board.play_move(Move::from_coords(2, 0), Token::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Token::X, &[(0, 0), (1, 1)]);
        assert_eq!(check_winner(&board), None);
    }
}
