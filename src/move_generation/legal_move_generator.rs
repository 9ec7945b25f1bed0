//! Full legal move generation pipeline.
//!
//! Collects capture chains for every piece of the side to move, keeps only
//! the longest ones, and falls back to simple moves only when no capture
//! exists anywhere on the board.

use crate::game_state::draughts_types::*;
use crate::game_state::square_numbering::to_internal;
use crate::move_generation::capture_search::{captures_from_square, longest_captures};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_man::generate_man_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>> {
        let captures = self.generate_captures(position)?;
        if !captures.is_empty() {
            return Ok(captures);
        }
        self.generate_simple_moves(position)
    }
}

impl LegalMoveGenerator {
    /// Longest capture chains for the side to move, across all of its pieces.
    pub fn generate_captures(&self, position: &Position) -> MoveGenResult<Vec<Move>> {
        let mut all = Vec::new();
        for (from, _) in position.pieces_of(position.side_to_move) {
            all.extend(captures_from_square(position, from)?);
        }
        Ok(longest_captures(all))
    }

    /// Non-capturing moves for the side to move, ignoring the capture obligation.
    pub fn generate_simple_moves(&self, position: &Position) -> MoveGenResult<Vec<Move>> {
        let mut out = Vec::with_capacity(64);
        for (from, piece) in position.pieces_of(position.side_to_move) {
            if piece.is_man() {
                generate_man_moves(position, from, piece, &mut out)?;
            } else {
                generate_king_moves(position, from, piece, &mut out)?;
            }
        }
        Ok(out)
    }

    /// Legal moves starting on `square`.
    ///
    /// Mandatory and longest capture are judged across the whole side, so a
    /// piece whose only capture is shorter than another piece's has no moves.
    pub fn generate_moves_from(&self, position: &Position, square: Square) -> MoveGenResult<Vec<Move>> {
        match position.piece_at(to_internal(square)) {
            Some(piece) if piece.color == position.side_to_move => {}
            _ => return Ok(Vec::new()),
        }
        let mut moves = self.generate_legal_moves(position)?;
        moves.retain(|mv| mv.from == square);
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::LegalMoveGenerator;
    use crate::game_state::draughts_types::Position;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::fen_parser::parse_fen;

    fn legal(fen: &str) -> Vec<String> {
        let position = parse_fen(fen).expect("test FEN should parse");
        LegalMoveGenerator
            .generate_legal_moves(&position)
            .expect("generation should succeed")
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn startpos_has_nine_moves() {
        let moves = LegalMoveGenerator
            .generate_legal_moves(&Position::starting())
            .expect("generation should succeed");
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn capture_is_mandatory_for_the_whole_side() {
        // 23x14 is forced even though 40 could step forward.
        assert_eq!(legal("W:W23,40:B19"), vec!["23x14"]);
    }

    #[test]
    fn only_the_longest_chain_survives() {
        assert_eq!(legal("W:W32,45:B19,28,40"), vec!["32x14"]);
    }

    #[test]
    fn equal_length_chains_are_all_kept() {
        let mut moves = legal("W:W28:B22,23");
        moves.sort();
        assert_eq!(moves, vec!["28x17", "28x19"]);
    }

    #[test]
    fn moves_from_square_respects_side_and_obligation() {
        let position = parse_fen("W:W23,40:B19").expect("test FEN should parse");
        let from_40 = LegalMoveGenerator
            .generate_moves_from(&position, 40)
            .expect("generation should succeed");
        assert!(from_40.is_empty());

        let from_19 = LegalMoveGenerator
            .generate_moves_from(&position, 19)
            .expect("generation should succeed");
        assert!(from_19.is_empty());

        let from_23 = LegalMoveGenerator
            .generate_moves_from(&position, 23)
            .expect("generation should succeed");
        assert_eq!(from_23.len(), 1);
        assert_eq!(from_23[0].takes(), &[19]);
    }

    #[test]
    fn black_moves_when_black_is_to_move() {
        let moves = legal("B:W31-50:B1-20");
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().any(|m| m == "19-23"));
    }
}
