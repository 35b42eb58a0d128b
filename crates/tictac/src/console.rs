//! Text console shared by human players and the session driver.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictac_engine::{Board, Move, PlayerError, PlayerErrorKind, Strategy, Token};
use tracing::{debug, instrument};

/// Console handle shared by everyone reading the same input.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// Whitespace-token reader plus a text writer.
///
/// Tokens are read across line boundaries, so `"5 9\n"` answers two
/// consecutive prompts.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Next whitespace-delimited token, `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so they surface as an unparsable token.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Writes text and flushes so prompts show before blocking on input.
    pub fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Human player typing board spaces 1-9 on a console.
pub struct ConsolePlayer<R, W> {
    name: String,
    console: SharedConsole<R, W>,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player.
    pub fn new(name: impl Into<String>, console: SharedConsole<R, W>) -> Self {
        Self {
            name: name.into(),
            console,
        }
    }

    #[instrument(skip(self, board), fields(player = %self.name))]
    fn prompt(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        let mut console = self.console.borrow_mut();
        console.write(&format!("The current game state is: \n{}\n", board))?;
        console.write(&format!("Your player token is: {}\n", token))?;
        console.write("Input a board space, 1 - 9 to move: ")?;

        let text = console
            .next_token()?
            .ok_or_else(|| PlayerError::new(PlayerErrorKind::InputClosed))?;
        debug!(input = %text, "Read board space");

        let space = parse_space(&text)?;
        Ok(Move::from_index(space - 1))
    }
}

/// Parses a typed space; the sign is ignored.
fn parse_space(text: &str) -> Result<i32, PlayerError> {
    text.parse::<i64>()
        .ok()
        .and_then(|n| i32::try_from(n.unsigned_abs()).ok())
        .ok_or_else(|| PlayerError::new(PlayerErrorKind::MalformedInput(text.to_string())))
}

impl<R: BufRead, W: Write> Strategy for ConsolePlayer<R, W> {
    fn first_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        self.prompt(board, token)
    }

    fn retry_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        self.console
            .borrow_mut()
            .write("You've made an invalid move.  Please try again.\n")?;
        self.prompt(board, token)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
