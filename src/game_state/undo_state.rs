use crate::game_state::draughts_types::*;
use crate::moves::move_descriptions::Move;

/// Single history record for `apply_move` / `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_side_to_move: Color,
    pub prev_move_number: u16,
}
