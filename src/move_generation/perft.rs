//! Leaf-node counting over the legal move tree.
//!
//! Walks the tree with apply/undo on a single scratch position, which also
//! exercises the exact reversibility of every generated move.

use crate::game_state::draughts_types::Position;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = *position;
    perft_recurse(generator, &mut scratch, depth)
}

pub fn perft_legal(position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    position: &mut Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let moves = generator.generate_legal_moves(position)?;
    let mut total = PerftCounts::default();

    if depth == 1 {
        total.nodes = moves.len() as u64;
        total.captures = moves.iter().filter(|m| m.is_capture()).count() as u64;
        total.promotions = moves.iter().filter(|m| m.promotes).count() as u64;
        return Ok(total);
    }

    for mv in &moves {
        let undo = apply_move(position, mv)?;
        let child = perft_recurse(generator, position, depth - 1);
        undo_move(position, &undo);
        total.merge(child?);
    }

    Ok(total)
}
