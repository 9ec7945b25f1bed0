//! Board occupancy plus side to move and move counter.
//!
//! `Position` is a plain `Copy` value: 56 cells with border sentinels at every
//! multiple of 11, so capture search can fork it per branch without sharing
//! mutable state.

use crate::game_state::draughts_rules::{
    BLACK_START_SQUARES, INTERNAL_BOARD_LEN, WHITE_START_SQUARES,
};
use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::{
    is_off_board, is_valid_square, playable_internal_squares, to_external, to_internal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [Cell; INTERNAL_BOARD_LEN],
    pub side_to_move: Color,
    pub move_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// Empty board, White to move, move 1.
    pub fn empty() -> Self {
        let mut cells = [Cell::Empty; INTERNAL_BOARD_LEN];
        for (index, cell) in cells.iter_mut().enumerate() {
            if is_off_board(index as isize) {
                *cell = Cell::Border;
            }
        }

        Self {
            cells,
            side_to_move: Color::White,
            move_number: 1,
        }
    }

    pub fn starting() -> Self {
        let mut position = Self::empty();
        for square in BLACK_START_SQUARES {
            position.set_piece(to_internal(square), Piece::BLACK_MAN);
        }
        for square in WHITE_START_SQUARES {
            position.set_piece(to_internal(square), Piece::WHITE_MAN);
        }
        position
    }

    /// Cell at an internal index; anything outside the buffer reads as border.
    #[inline]
    pub fn cell(&self, internal: InternalSquare) -> Cell {
        self.cells.get(internal).copied().unwrap_or(Cell::Border)
    }

    #[inline]
    pub fn piece_at(&self, internal: InternalSquare) -> Option<Piece> {
        self.cell(internal).piece()
    }

    /// Piece on a public square, `None` for empty or out-of-range squares.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        if !is_valid_square(square) {
            return None;
        }
        self.piece_at(to_internal(square))
    }

    /// Writes a piece; border cells are never touched.
    #[inline]
    pub(crate) fn set_piece(&mut self, internal: InternalSquare, piece: Piece) {
        if !is_off_board(internal as isize) {
            self.cells[internal] = Cell::Occupied(piece);
        }
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, internal: InternalSquare) {
        if !is_off_board(internal as isize) {
            self.cells[internal] = Cell::Empty;
        }
    }

    /// Places `piece` on a public square. Returns `false` for an invalid square.
    pub fn put(&mut self, square: Square, piece: Piece) -> bool {
        if !is_valid_square(square) {
            return false;
        }
        self.set_piece(to_internal(square), piece);
        true
    }

    /// Empties a public square and returns what was there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_on(square)?;
        self.clear_square(to_internal(square));
        Some(piece)
    }

    /// Every occupied square in ascending public order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        playable_internal_squares()
            .filter_map(move |internal| self.piece_at(internal).map(|p| (to_external(internal), p)))
    }

    /// Occupied internal squares belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (InternalSquare, Piece)> + '_ {
        playable_internal_squares().filter_map(move |internal| match self.piece_at(internal) {
            Some(piece) if piece.color == color => Some((internal, piece)),
            _ => None,
        })
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces_of(color).next().is_some()
    }

    /// Same pieces on the same squares as the starting layout (ignores counters).
    pub fn has_starting_layout(&self) -> bool {
        self.cells == Self::starting().cells
    }

    /// 51-character board string: side to move followed by squares `1..=50`.
    pub fn to_external_string(&self) -> String {
        let mut out = String::with_capacity(51);
        out.push(self.side_to_move.to_char());
        for internal in playable_internal_squares() {
            out.push(self.cell(internal).to_char());
        }
        out
    }
}
