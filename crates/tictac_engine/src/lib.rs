//! Tic-tac-toe engine.
//!
//! The engine owns the rules and the turn loop. Who chooses the moves is
//! pluggable through [`Strategy`]; the engine only guarantees that nothing
//! illegal ever reaches the board.
//!
//! # Architecture
//!
//! - **Move**: a coordinate pair, valid or not
//! - **Board**: the grid, the legality predicate and victory detection
//! - **Player**: a token plus a strategy, re-asked until the move is legal
//! - **Game**: alternates two players on one board until a win or a draw
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Game, Outcome, ScriptedStrategy, Token};
//!
//! let mut game = Game::new(
//!     Box::new(ScriptedStrategy::from_spaces("x", [1, 4, 7])),
//!     Box::new(ScriptedStrategy::from_spaces("o", [2, 5])),
//! );
//! assert_eq!(game.play().unwrap(), Outcome::Won(Token::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod error;
mod game;
mod player;
pub mod rules;
mod strategies;
mod types;

pub use action::{Move, SIDE};
pub use board::Board;
pub use config::Diagnostics;
pub use error::{PlayerError, PlayerErrorKind};
pub use game::{Game, GameRecord, GameStatus, MAX_MOVES, Outcome, Ply};
pub use player::{Player, Strategy};
pub use strategies::{ScriptedStrategy, SimpleStupidity};
pub use types::{Cell, Token};
