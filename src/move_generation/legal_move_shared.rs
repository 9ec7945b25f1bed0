use crate::game_state::draughts_rules::is_promotion_square;
use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::to_external;

/// One jump over an enemy piece: which square is taken and where the piece lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureStep {
    pub direction: Direction,
    pub take: InternalSquare,
    pub landing: InternalSquare,
}

#[inline]
pub fn is_enemy(cell: Cell, own: Color) -> bool {
    matches!(cell.piece(), Some(piece) if piece.color != own)
}

/// Whether `piece` finishing on internal square `to` becomes a king.
#[inline]
pub fn promotes_on(piece: Piece, to: InternalSquare) -> bool {
    piece.is_man() && is_promotion_square(piece.color, to_external(to))
}
