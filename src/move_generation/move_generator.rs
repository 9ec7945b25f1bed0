use thiserror::Error;

use crate::game_state::draughts_types::{InternalSquare, Position, Square};
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenerationError {
    #[error("internal square {0} is off the board")]
    OffBoard(InternalSquare),

    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("invalid game state: {0}")]
    InvalidState(String),
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for the side to move, honouring mandatory and longest capture.
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>>;
}
