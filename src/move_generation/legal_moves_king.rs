use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::{step, to_external};
use crate::move_generation::direction_scan::{leading_empties, scan_directions};
use crate::move_generation::legal_move_shared::{is_enemy, CaptureStep};
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::move_descriptions::Move;

/// Flying-king slides: every empty square up to the first obstacle on each diagonal.
pub fn generate_king_moves(
    position: &Position,
    from: InternalSquare,
    piece: Piece,
    out: &mut Vec<Move>,
) -> MoveGenResult<()> {
    let rays = scan_directions(position, from, None)?;

    for (dir, ray) in rays.iter() {
        for distance in 1..=leading_empties(ray) {
            if let Some(to) = step(from, dir, distance) {
                out.push(Move::simple(to_external(from), to_external(to), piece, false));
            }
        }
    }

    Ok(())
}

/// Long-range jumps: any empties, one enemy, then one or more empty landing squares.
///
/// Each landing square beyond the enemy is a separate step.
pub fn king_capture_steps(
    position: &Position,
    from: InternalSquare,
    piece: Piece,
    excluded: Option<Direction>,
) -> MoveGenResult<Vec<CaptureStep>> {
    let rays = scan_directions(position, from, None)?;
    let mut steps = Vec::new();

    for (dir, ray) in rays.iter() {
        if Some(dir) == excluded {
            continue;
        }

        let take_distance = leading_empties(ray) + 1;
        let Some(over) = ray.get(take_distance) else {
            continue;
        };
        if !is_enemy(*over, piece.color) {
            continue;
        }

        let landings = leading_empties(&ray[take_distance..]);
        let Some(take) = step(from, dir, take_distance) else {
            continue;
        };
        for extra in 1..=landings {
            if let Some(landing) = step(from, dir, take_distance + extra) {
                steps.push(CaptureStep {
                    direction: dir,
                    take,
                    landing,
                });
            }
        }
    }

    Ok(steps)
}
