//! Move execution and exact reversal.
//!
//! `apply_move` checks every precondition before touching the board, so a
//! rejected move leaves the position untouched. The returned `UndoState`
//! holds everything `undo_move` needs to restore the prior position bit for bit.

use tracing::trace;

use crate::game_state::draughts_rules::is_promotion_square;
use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::{is_valid_square, to_internal};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::Move;

pub fn apply_move(position: &mut Position, mv: &Move) -> MoveGenResult<UndoState> {
    validate_move(position, mv)?;

    let from = to_internal(mv.from);
    let to = to_internal(mv.to);

    position.clear_square(from);
    for &square in mv.takes() {
        position.clear_square(to_internal(square));
    }

    let promotes = mv.piece.is_man() && is_promotion_square(mv.piece.color, mv.to);
    let landed = if promotes { mv.piece.promoted() } else { mv.piece };
    position.set_piece(to, landed);

    let undo = UndoState {
        mv: Move {
            promotes,
            ..mv.clone()
        },
        prev_side_to_move: position.side_to_move,
        prev_move_number: position.move_number,
    };

    if position.side_to_move == Color::Black {
        position.move_number = position.move_number.saturating_add(1);
    }
    position.side_to_move = position.side_to_move.opposite();

    trace!(from = mv.from, to = mv.to, flag = ?undo.mv.flag(), "applied move");
    Ok(undo)
}

pub fn undo_move(position: &mut Position, undo: &UndoState) {
    let mv = &undo.mv;

    position.side_to_move = undo.prev_side_to_move;
    position.move_number = undo.prev_move_number;

    position.clear_square(to_internal(mv.to));
    for (&square, &piece) in mv.takes().iter().zip(mv.pieces_taken()) {
        position.set_piece(to_internal(square), piece);
    }
    // `mv.piece` is the pre-move symbol, so this also demotes a promoted man.
    position.set_piece(to_internal(mv.from), mv.piece);

    trace!(from = mv.from, to = mv.to, "undid move");
}

fn validate_move(position: &Position, mv: &Move) -> MoveGenResult<()> {
    if !is_valid_square(mv.from) || !is_valid_square(mv.to) {
        return Err(MoveGenerationError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    if mv.piece.color != position.side_to_move {
        return Err(MoveGenerationError::InvalidState(format!(
            "piece {} does not belong to side to move {}",
            mv.piece, position.side_to_move
        )));
    }

    if position.piece_on(mv.from) != Some(mv.piece) {
        return Err(MoveGenerationError::InvalidState(format!(
            "expected {} on square {}",
            mv.piece, mv.from
        )));
    }

    // A king chain may end where it started.
    if mv.to != mv.from && position.piece_on(mv.to).is_some() {
        return Err(MoveGenerationError::InvalidState(format!(
            "destination square {} is occupied",
            mv.to
        )));
    }

    if mv.takes().len() != mv.pieces_taken().len() {
        return Err(MoveGenerationError::InvalidState(
            "captured squares and captured pieces differ in length".to_owned(),
        ));
    }

    for (&square, &piece) in mv.takes().iter().zip(mv.pieces_taken()) {
        if !is_valid_square(square) || position.piece_on(square) != Some(piece) {
            return Err(MoveGenerationError::InvalidState(format!(
                "expected captured {piece} on square {square}"
            )));
        }
    }

    Ok(())
}
