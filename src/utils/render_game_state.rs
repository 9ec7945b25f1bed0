//! Fixed-width text board for terminals and test diagnostics.
//!
//! Ten rows inside a `+---+` frame. Odd rows are shifted right by two columns
//! so the five playable squares of each row line up diagonally.

use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::to_internal;

const FRAME: &str = "+-------------------------------+\n";

/// Renders `position` with piece letters (`w`, `W`, `b`, `B`, `0` for empty)
/// or, when `unicode` is set, draughts glyphs with blanks for empty squares.
pub fn render_game_state(position: &Position, unicode: bool) -> String {
    let mut out = String::with_capacity(400);
    out.push('\n');
    out.push_str(FRAME);

    for row in 1..=10u8 {
        out.push_str("|\t");
        if row % 2 == 1 {
            out.push_str("  ");
        }

        for col in 0..5u8 {
            let square = (row - 1) * 5 + col + 1;
            out.push(' ');
            out.push_str(&square_symbol(position, square, unicode));
            out.push_str("  ");
        }

        if row % 2 == 0 {
            out.push_str("  ");
        }
        out.push_str("\t|\n");
    }

    out.push_str(FRAME);
    out
}

fn square_symbol(position: &Position, square: Square, unicode: bool) -> String {
    let cell = position.cell(to_internal(square));
    match (unicode, cell.piece()) {
        (true, Some(piece)) => piece.to_unicode().to_string(),
        (true, None) => "  ".to_owned(),
        (false, _) => cell.to_char().to_string(),
    }
}
