//! Marble solitaire runner (default binary).
//!
//! Wires the board model, the text view, and the interactive controller
//! onto stdin/stdout. Moves are entered as four 1-based coordinates
//! (`from_row from_col to_row to_col`); `q` quits.

use std::io;

use anyhow::{bail, Context, Result};

use marble_solitaire::controller::GameController;
use marble_solitaire::core::Board;

fn main() -> Result<()> {
    let mut board = board_from_args().context("could not set up the board")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = GameController::new(stdin.lock(), stdout.lock());
    controller.play_game(&mut board)?;
    Ok(())
}

/// Build the board from the command line.
///
/// `marble-solitaire [ARM_THICKNESS [EMPTY_ROW EMPTY_COL]]`, row and column
/// 0-based. No arguments gives the classic board.
fn board_from_args() -> Result<Board> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(Board::new()),
        [arm] => {
            let arm = parse_arg(arm, "ARM_THICKNESS")?;
            Ok(Board::with_arm_thickness(arm)?)
        }
        [arm, row, col] => {
            let arm = parse_arg(arm, "ARM_THICKNESS")?;
            let row = parse_arg(row, "EMPTY_ROW")?;
            let col = parse_arg(col, "EMPTY_COL")?;
            Ok(Board::with_start(arm, row, col)?)
        }
        _ => bail!("usage: marble-solitaire [ARM_THICKNESS [EMPTY_ROW EMPTY_COL]]"),
    }
}

fn parse_arg(arg: &str, name: &str) -> Result<usize> {
    arg.parse()
        .with_context(|| format!("{name} must be a non-negative number, got {arg:?}"))
}
