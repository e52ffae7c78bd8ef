//! Text rendering of the board grid.
//!
//! A pure function over the board's snapshot accessors; the board and
//! game layers never format anything themselves.

use crate::board::Board;

/// Renders the grid as text: cells joined with `|`, rows separated by a
/// dash rule, empty cells as spaces.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        out.push('\n');
        if y != 0 {
            out.push_str(&"-".repeat(board.width() * 2 - 1));
            out.push('\n');
        }
        for x in 0..board.width() {
            if x > 0 {
                out.push('|');
            }
            match board.get(x, y) {
                Some(mark) => out.push(mark.0),
                None => out.push(' '),
            }
        }
    }
    out.push_str("\n\n");
    out
}
