use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::{step, to_external};
use crate::move_generation::direction_scan::{
    scan_directions, MAN_CAPTURE_RAY, MAN_MOVE_RAY,
};
use crate::move_generation::legal_move_shared::{is_enemy, promotes_on, CaptureStep};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::move_descriptions::Move;

/// Forward one-step moves onto empty squares.
pub fn generate_man_moves(
    position: &Position,
    from: InternalSquare,
    piece: Piece,
    out: &mut Vec<Move>,
) -> MoveGenResult<()> {
    let rays = scan_directions(position, from, Some(MAN_MOVE_RAY))?;

    for (dir, ray) in rays.iter() {
        if !dir.is_forward_for(piece.color) {
            continue;
        }
        if let [_, Cell::Empty] = ray {
            if let Some(to) = step(from, dir, 1) {
                out.push(Move::simple(
                    to_external(from),
                    to_external(to),
                    piece,
                    promotes_on(piece, to),
                ));
            }
        }
    }

    Ok(())
}

/// Short jumps in any direction: adjacent enemy, empty square right behind it.
pub fn man_capture_steps(
    position: &Position,
    from: InternalSquare,
    piece: Piece,
    excluded: Option<Direction>,
) -> MoveGenResult<Vec<CaptureStep>> {
    let rays = scan_directions(position, from, Some(MAN_CAPTURE_RAY))?;
    let mut steps = Vec::new();

    for (dir, ray) in rays.iter() {
        if Some(dir) == excluded {
            continue;
        }
        let [_, over, Cell::Empty] = ray else {
            continue;
        };
        if !is_enemy(*over, piece.color) {
            continue;
        }
        if let (Some(take), Some(landing)) = (step(from, dir, 1), step(from, dir, 2)) {
            steps.push(CaptureStep {
                direction: dir,
                take,
                landing,
            });
        }
    }

    Ok(steps)
}
