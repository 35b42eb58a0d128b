//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Victory and draw are never
//! stored; they are recomputed from the grid on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};
