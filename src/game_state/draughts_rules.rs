//! Canonical rule constants for 10x10 international draughts.
//!
//! Holds the start layout, board dimensions, promotion rows, and the result
//! vocabulary recognised by the game-notation codec.

use crate::game_state::draughts_types::{Color, Square};

/// Starting layout in exchange notation, White to move.
pub const STARTING_POSITION_FEN: &str = "W:W31-50:B1-20";

/// Number of playable (dark) squares.
pub const BOARD_SQUARES: Square = 50;

/// Length of the padded internal board buffer.
pub const INTERNAL_BOARD_LEN: usize = 56;

/// Side-only strings that decode to an empty board.
pub const EMPTY_POSITION_FENS: [&str; 3] = ["B::", "W::", "?::"];

pub const RESULT_TOKENS: [&str; 8] = ["2-0", "0-2", "1-1", "0-0", "1-0", "0-1", "1/2-1/2", "*"];

/// Black men start on `1..=20`, White men on `31..=50`.
pub const BLACK_START_SQUARES: std::ops::RangeInclusive<Square> = 1..=20;
pub const WHITE_START_SQUARES: std::ops::RangeInclusive<Square> = 31..=50;

/// White promotes on the top row (`1..=5`), Black on the bottom row (`46..=50`).
#[inline]
pub fn is_promotion_square(color: Color, square: Square) -> bool {
    match color {
        Color::White => square <= 5,
        Color::Black => square >= 46,
    }
}

#[inline]
pub fn is_result_token(token: &str) -> bool {
    RESULT_TOKENS.contains(&token)
}
