//! Console tic-tac-toe.
//!
//! Wires the [`tictac_engine`] to a text console: a human player reading
//! board spaces, the "play again" session loop, configuration and the
//! command line.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictac::{Console, Session, SessionConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = Cursor::new(b"1 4 2 5 3\nno\n".to_vec());
//! let console = Console::new(input, Vec::new()).shared();
//! let summary = Session::new(SessionConfig::default(), console).run()?;
//! assert_eq!(*summary.x_wins(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod replay;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayerKind, SessionConfig};

// Crate-level exports - Console collaborator
pub use console::{Console, ConsolePlayer, SharedConsole};

// Crate-level exports - Replay
pub use replay::{replay, write_json, write_report};

// Crate-level exports - Session driver
pub use session::{PLAY_AGAIN, Session, SessionSummary};
