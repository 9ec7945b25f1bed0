//! Recursive multi-jump capture search.
//!
//! Every branch works on its own `Position` copy in which the capturing piece
//! has been moved to its landing square. Jumped pieces stay on the board
//! until the move is executed, so they keep blocking rays and cannot be
//! jumped a second time.

use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::to_external;
use crate::move_generation::legal_move_shared::{promotes_on, CaptureStep};
use crate::move_generation::legal_moves_king::king_capture_steps;
use crate::move_generation::legal_moves_man::man_capture_steps;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::move_descriptions::{CaptureChain, Move};

/// Capture sequence in internal coordinates while the search is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CaptureSequence {
    jumps: Vec<InternalSquare>,
    takes: Vec<InternalSquare>,
    pieces_taken: Vec<Piece>,
}

impl CaptureSequence {
    fn extended(&self, step: &CaptureStep, taken: Piece) -> Self {
        let mut next = self.clone();
        next.jumps.push(step.landing);
        next.takes.push(step.take);
        next.pieces_taken.push(taken);
        next
    }

    fn into_move(self, piece: Piece) -> Move {
        let landing = self.jumps.last().copied().unwrap_or_default();
        let chain = CaptureChain {
            jumps: self.jumps.into_iter().map(to_external).collect(),
            takes: self.takes.into_iter().map(to_external).collect(),
            pieces_taken: self.pieces_taken,
        };
        Move::capture(chain, piece, promotes_on(piece, landing))
    }
}

/// All complete capture chains for the piece on `from`, longest or not.
pub fn captures_from_square(position: &Position, from: InternalSquare) -> MoveGenResult<Vec<Move>> {
    let Some(piece) = position.piece_at(from) else {
        return Ok(Vec::new());
    };

    let root = CaptureSequence {
        jumps: vec![from],
        ..CaptureSequence::default()
    };
    let mut finished = Vec::new();
    search_captures(*position, from, piece, None, &root, &mut finished)?;

    Ok(finished.into_iter().map(|seq| seq.into_move(piece)).collect())
}

fn search_captures(
    position: Position,
    at: InternalSquare,
    piece: Piece,
    came_from: Option<Direction>,
    sequence: &CaptureSequence,
    finished: &mut Vec<CaptureSequence>,
) -> MoveGenResult<()> {
    let steps = if piece.is_man() {
        man_capture_steps(&position, at, piece, came_from)?
    } else {
        king_capture_steps(&position, at, piece, came_from)?
    };

    let mut extended = false;
    for step in steps {
        if sequence.takes.contains(&step.take) {
            continue;
        }
        let Some(taken) = position.piece_at(step.take) else {
            continue;
        };

        let mut branch = position;
        branch.clear_square(at);
        branch.set_piece(step.landing, piece);

        extended = true;
        search_captures(
            branch,
            step.landing,
            piece,
            Some(step.direction.opposite()),
            &sequence.extended(&step, taken),
            finished,
        )?;
    }

    if !extended && !sequence.takes.is_empty() {
        finished.push(sequence.clone());
    }

    Ok(())
}

/// Keeps only the chains with the most jumps; fewer than two jumps means no capture.
pub fn longest_captures(captures: Vec<Move>) -> Vec<Move> {
    let max_jumps = captures.iter().map(|m| m.jumps().len()).max().unwrap_or(0);
    if max_jumps < 2 {
        return Vec::new();
    }
    captures
        .into_iter()
        .filter(|m| m.jumps().len() == max_jumps)
        .collect()
}
