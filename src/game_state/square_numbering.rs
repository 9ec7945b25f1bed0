//! Conversions between public square numbers and padded internal indices.
//!
//! ```text
//!  External               Internal
//!    01  02  03  04  05     01  02  03  04  05
//!  06  07  08  09  10     06  07  08  09  10
//!    11  12  13  14  15     12  13  14  15  16
//!  16  17  18  19  20     17  18  19  20  21
//!    ..                     ..
//!  46  47  48  49  50     50  51  52  53  54
//! ```
//!
//! Internal indices that are multiples of 11 (and anything outside `0..=55`)
//! are border cells, so a diagonal step that leaves the board always lands on
//! one of them.

use crate::game_state::draughts_rules::{BOARD_SQUARES, INTERNAL_BOARD_LEN};
use crate::game_state::draughts_types::{Direction, InternalSquare, Square};

/// `internal = external + (external - 1) / 10`
#[inline]
pub fn to_internal(external: Square) -> InternalSquare {
    let n = external as usize;
    n + n.saturating_sub(1) / 10
}

/// `external = internal - (internal - 1) / 11`. Only meaningful for on-board indices.
#[inline]
pub fn to_external(internal: InternalSquare) -> Square {
    (internal - internal.saturating_sub(1) / 11) as Square
}

#[inline]
pub fn is_off_board(internal: isize) -> bool {
    internal < 0 || internal >= INTERNAL_BOARD_LEN as isize || internal % 11 == 0
}

#[inline]
pub fn is_valid_square(square: Square) -> bool {
    (1..=BOARD_SQUARES).contains(&square)
}

/// Internal index `distance` steps away in `direction`, or `None` once off-board.
#[inline]
pub fn step(from: InternalSquare, direction: Direction, distance: usize) -> Option<InternalSquare> {
    let target = from as isize + direction.step() * distance as isize;
    if is_off_board(target) {
        None
    } else {
        Some(target as InternalSquare)
    }
}

/// Iterates every playable internal index in ascending order.
pub fn playable_internal_squares() -> impl Iterator<Item = InternalSquare> {
    (0..INTERNAL_BOARD_LEN).filter(|&i| !is_off_board(i as isize))
}
