//! Text view module - renders a board into a fixed character grid.
//!
//! This is a read-only consumer of the board model: it formats, it never
//! decides. Rendering to a `String` keeps the view testable without a
//! terminal and lets the controller write it wherever its output goes.

use marble_solitaire_core::Board;

/// Render the board as a character grid.
///
/// One line per board row. Each slot is a single character (`O` marble,
/// `_` empty, space for positions outside the cross), slots separated by
/// single spaces. Rows keep their leading padding but carry no trailing
/// whitespace; rows are joined with `\n` and there is no trailing newline.
///
/// # Examples
///
/// ```
/// use marble_solitaire_core::Board;
/// use marble_solitaire_view::render;
///
/// let board = Board::with_arm_thickness(1).unwrap();
/// assert_eq!(render(&board), "_");
/// ```
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut lines = Vec::with_capacity(size);
    for row in board.slots().chunks(size) {
        let mut line = String::with_capacity(2 * size);
        for (col, slot) in row.iter().enumerate() {
            if col > 0 {
                line.push(' ');
            }
            line.push(slot.as_char());
        }
        line.truncate(line.trim_end().len());
        lines.push(line);
    }
    lines.join("\n")
}

/// Render the board followed by its score line, the way the interactive
/// loop presents game state.
pub fn render_with_score(board: &Board) -> String {
    format!("{}\nScore: {}", render(board), board.score())
}
