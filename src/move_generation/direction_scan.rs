//! Diagonal ray scanning shared by simple-move and capture generation.
//!
//! A ray is the run of cells met when walking from a square in one
//! direction, starting with the square itself and stopping at the board edge
//! or after `max_length` cells.

use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::{is_off_board, step};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};

/// Man moves look one step ahead (`[piece, target]`).
pub const MAN_MOVE_RAY: usize = 2;
/// Man captures look two steps ahead (`[piece, enemy, landing]`).
pub const MAN_CAPTURE_RAY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRays {
    rays: [Vec<Cell>; 4],
}

impl DirectionRays {
    #[inline]
    pub fn ray(&self, direction: Direction) -> &[Cell] {
        &self.rays[direction.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[Cell])> + '_ {
        ALL_DIRECTIONS
            .into_iter()
            .map(move |dir| (dir, self.ray(dir)))
    }
}

/// Scans all four diagonals from `square`. `max_length` of `None` scans to the edge.
pub fn scan_directions(
    position: &Position,
    square: InternalSquare,
    max_length: Option<usize>,
) -> MoveGenResult<DirectionRays> {
    if is_off_board(square as isize) {
        return Err(MoveGenerationError::OffBoard(square));
    }

    let limit = max_length.unwrap_or(usize::MAX).max(1);
    let rays = ALL_DIRECTIONS.map(|dir| {
        let mut ray = vec![position.cell(square)];
        let mut current = square;
        while ray.len() < limit {
            match step(current, dir, 1) {
                Some(next) => {
                    ray.push(position.cell(next));
                    current = next;
                }
                None => break,
            }
        }
        ray
    });

    Ok(DirectionRays { rays })
}

/// Number of empty cells directly following the first element of `ray`.
#[inline]
pub fn leading_empties(ray: &[Cell]) -> usize {
    ray.iter().skip(1).take_while(|cell| cell.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::square_numbering::to_internal;

    fn ray_string(ray: &[Cell]) -> String {
        ray.iter().map(|cell| cell.to_char()).collect()
    }

    #[test]
    fn off_board_square_is_rejected() {
        let position = Position::starting();
        assert_eq!(
            scan_directions(&position, 11, None),
            Err(MoveGenerationError::OffBoard(11))
        );
    }

    #[test]
    fn unbounded_rays_reach_the_edge() {
        let mut position = Position::empty();
        position.put(46, Piece::WHITE_KING);
        position.put(28, Piece::BLACK_MAN);
        let rays = scan_directions(&position, to_internal(46), None).expect("on board");

        assert_eq!(ray_string(rays.ray(Direction::NorthEast)), "W000b00000");
        assert_eq!(ray_string(rays.ray(Direction::NorthWest)), "W");
        assert_eq!(ray_string(rays.ray(Direction::SouthEast)), "W");
        assert_eq!(leading_empties(rays.ray(Direction::NorthEast)), 3);
    }

    #[test]
    fn bounded_rays_stop_at_max_length() {
        let position = Position::starting();
        let rays = scan_directions(&position, to_internal(32), Some(MAN_CAPTURE_RAY))
            .expect("on board");

        assert_eq!(ray_string(rays.ray(Direction::NorthEast)), "w00");
        assert_eq!(ray_string(rays.ray(Direction::SouthWest)), "www");
        assert_eq!(rays.iter().count(), 4);
    }
}
