//! Interactive game loop over line-oriented input.
//!
//! The controller is generic over `BufRead`/`Write`, so the same loop runs
//! against stdin/stdout in the binary and against in-memory buffers in
//! tests. It owns the user-facing protocol: prompts, re-prompts for bad
//! tokens, the quit marker, and the end-of-game transcript. The board model
//! never sees raw input.
//!
//! Protocol: moves are four whitespace-separated 1-based coordinates
//! (`from_row from_col to_row to_col`), free to span lines. `q` or `Q` at
//! any position quits. Tokens that are not positive numbers are skipped
//! with a re-prompt.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use marble_solitaire_core::Board;
use marble_solitaire_view::render_with_score;
use thiserror::Error;

/// Failures at the loop boundary.
///
/// Bad user tokens and illegal moves are handled inside the loop and never
/// surface here; these are the conditions the loop cannot play through.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The input source ended before the game was quit or finished.
    #[error("ran out of input before the game was quit or finished")]
    OutOfInput,
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user sent the quit marker.
    Quit,
    /// No marble had a legal move left.
    GameOver,
}

enum Token {
    Coordinate(usize),
    Quit,
}

/// Drives a [`Board`] from an input token stream, writing the transcript
/// to `output`.
pub struct GameController<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> GameController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Play until the game is over or the user quits.
    ///
    /// Writes the board and score before every prompt, reports rejected
    /// moves with their reason, and finishes with either the quit block or
    /// the game-over block.
    pub fn play_game(&mut self, board: &mut Board) -> Result<Outcome, ControllerError> {
        while !board.is_game_over() {
            writeln!(self.output, "{}", render_with_score(board))?;

            let mut coords = [0usize; 4];
            let mut quit = false;
            for coord in coords.iter_mut() {
                match self.next_coordinate()? {
                    Token::Coordinate(value) => *coord = value,
                    Token::Quit => {
                        quit = true;
                        break;
                    }
                }
            }
            if quit {
                writeln!(self.output, "Game quit!")?;
                writeln!(self.output, "State of game when quit:")?;
                writeln!(self.output, "{}", render_with_score(board))?;
                return Ok(Outcome::Quit);
            }

            let [from_row, from_col, to_row, to_col] = coords;
            if let Err(reason) = board.make_move(from_row, from_col, to_row, to_col) {
                writeln!(self.output, "Invalid move. Play again. ({reason})")?;
            }
        }

        writeln!(self.output, "Game over!")?;
        writeln!(self.output, "{}", render_with_score(board))?;
        Ok(Outcome::GameOver)
    }

    /// Read tokens until a usable coordinate or the quit marker shows up.
    ///
    /// Coordinates arrive 1-based and are converted to the model's 0-based
    /// indexing here.
    fn next_coordinate(&mut self) -> Result<Token, ControllerError> {
        loop {
            let token = self.next_token()?;
            if token.eq_ignore_ascii_case("q") {
                return Ok(Token::Quit);
            }
            match token.parse::<usize>() {
                Ok(value) if value >= 1 => return Ok(Token::Coordinate(value - 1)),
                _ => writeln!(
                    self.output,
                    "Unexpected value, please enter a positive number or 'q' to quit"
                )?,
            }
        }
    }

    fn next_token(&mut self) -> Result<String, ControllerError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ControllerError::OutOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(input: &str) -> (Result<Outcome, ControllerError>, String) {
        let mut board = Board::new();
        let mut output = Vec::new();
        let result = {
            let mut controller = GameController::new(input.as_bytes(), &mut output);
            controller.play_game(&mut board)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_on_first_token() {
        let (result, output) = play("q\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Game quit!\nState of game when quit:\n"));
        assert!(output.contains("Score: 32"));
    }

    #[test]
    fn test_quit_mid_move() {
        let (result, output) = play("4 2 q\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Game quit!"));
    }

    #[test]
    fn test_tokens_span_lines() {
        // a full move spread over four lines: (2,4) -> (3,3) in 0-based terms
        let (result, output) = play("3\n5\n4\n4\nq\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Score: 31"));
    }

    #[test]
    fn test_garbage_token_is_reprompted() {
        let (result, output) = play("garbage q\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Unexpected value, please enter a positive number or 'q' to quit"));
    }

    #[test]
    fn test_zero_is_not_a_coordinate() {
        let (result, output) = play("0 q\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Unexpected value"));
    }

    #[test]
    fn test_invalid_move_reports_and_continues() {
        let (result, output) = play("1 1 1 1\nq\n");
        assert!(matches!(result, Ok(Outcome::Quit)));
        assert!(output.contains("Invalid move. Play again."));
    }

    #[test]
    fn test_truncated_input_is_an_error() {
        let (result, _) = play("4 2 4");
        assert!(matches!(result, Err(ControllerError::OutOfInput)));
    }
}
