//! Non-interactive games from a list of board spaces.

use anyhow::{Context, Result};
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use tictac_engine::{
    Board, Diagnostics, Game, GameRecord, Move, Outcome, PlayerError, ScriptedStrategy, Strategy,
    Token,
};
use tracing::{info, instrument, warn};

/// Scripted strategy that counts the spaces it hands out.
struct CountedScript {
    script: ScriptedStrategy,
    used: Rc<Cell<usize>>,
}

impl CountedScript {
    fn new(name: &str, spaces: impl IntoIterator<Item = i32>, used: Rc<Cell<usize>>) -> Self {
        Self {
            script: ScriptedStrategy::from_spaces(name, spaces),
            used,
        }
    }

    fn next(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        let mv = self.script.first_move(board, token)?;
        self.used.set(self.used.get() + 1);
        Ok(mv)
    }
}

impl Strategy for CountedScript {
    fn first_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        self.next(board, token)
    }

    fn retry_move(&mut self, board: &Board, token: Token) -> Result<Move, PlayerError> {
        self.next(board, token)
    }

    fn name(&self) -> &str {
        self.script.name()
    }
}

/// Plays `spaces` (1-based) dealt alternately to `X` and `O`.
///
/// Each player consumes its own share in order, including after a rejected
/// space. Running out of spaces before the game ends is an error.
#[instrument(skip(diagnostics))]
pub fn replay(spaces: &[i32], diagnostics: Diagnostics) -> Result<GameRecord> {
    let x = spaces.iter().copied().step_by(2);
    let o = spaces.iter().copied().skip(1).step_by(2);
    let used = Rc::new(Cell::new(0));

    let mut game = Game::with_diagnostics(
        Box::new(CountedScript::new("replay X", x, Rc::clone(&used))),
        Box::new(CountedScript::new("replay O", o, Rc::clone(&used))),
        diagnostics,
    );
    let outcome = game
        .play()
        .with_context(|| format!("Replay stopped after {} moves", game.moves()))?;

    let unused = spaces.len() - used.get();
    if unused > 0 {
        warn!(supplied = spaces.len(), unused, "Spaces left over after the game ended");
    }
    info!(%outcome, "Replay finished");
    Ok(game.record())
}

/// Writes the replay result as text: the outcome and the ending board.
pub fn write_report(out: &mut impl Write, record: &GameRecord) -> Result<()> {
    let mut game_board = Board::new();
    for ply in record.history() {
        game_board.play_move(ply.mv, ply.token);
    }
    match record.outcome() {
        Some(Outcome::Won(token)) => writeln!(out, "This game's winner is: {}", token)?,
        Some(Outcome::Draw) => writeln!(out, "The game is tied.")?,
        None => writeln!(out, "The game is unfinished.")?,
    }
    writeln!(out, "Ending board: \n{}", game_board)?;
    Ok(())
}

/// Writes the replay result as JSON.
pub fn write_json(out: &mut impl Write, record: &GameRecord) -> Result<()> {
    let json = record.to_json().context("Failed to serialize game record")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_reports_winner() {
        let record = replay(&[1, 4, 2, 5, 3], Diagnostics::quiet()).unwrap();
        assert_eq!(*record.outcome(), Some(Outcome::Won(Token::X)));

        let mut out = Vec::new();
        write_report(&mut out, &record).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("This game's winner is: X\n"));
        assert!(text.contains("X|X|X\n"));
    }

    #[test]
    fn test_replay_too_short_fails() {
        let err = replay(&[1, 2, 3], Diagnostics::quiet()).unwrap_err();
        assert!(format!("{err:#}").contains("Input closed"));
    }

    #[test]
    fn test_leftover_spaces_are_ignored() {
        let record = replay(&[1, 4, 2, 5, 3, 9, 8], Diagnostics::quiet()).unwrap();
        assert_eq!(record.history().len(), 5);
    }

    #[test]
    fn test_rejected_spaces_are_not_leftovers() {
        // O's first space collides with X's; 6 spaces are consumed in 5 moves.
        let used = Rc::new(Cell::new(0));
        let mut game = Game::new(
            Box::new(CountedScript::new("x", [1, 2, 3], Rc::clone(&used))),
            Box::new(CountedScript::new("o", [1, 4, 5], Rc::clone(&used))),
        );
        assert_eq!(game.play().unwrap(), Outcome::Won(Token::X));
        assert_eq!(game.moves(), 5);
        assert_eq!(used.get(), 6);

        let record = replay(&[1, 1, 2, 4, 3, 5], Diagnostics::quiet()).unwrap();
        assert_eq!(record.history().len(), 5);
    }

    #[test]
    fn test_json_output_parses() {
        let record = replay(&[5, 1, 9, 3, 2, 8, 4, 6, 7], Diagnostics::quiet()).unwrap();
        let mut out = Vec::new();
        write_json(&mut out, &record).unwrap();
        let parsed: GameRecord = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, record);
    }
}
