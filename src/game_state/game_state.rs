//! Game facade: position, move history and header metadata for one game.
//!
//! `GameState` owns everything about a single game and exposes the
//! non-throwing surface used by interactive callers (booleans and `Option`s),
//! with `try_*` variants returning typed errors for `?`-style callers.

use tracing::{debug, warn};

use crate::errors::{FenError, PdnError};
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::move_generation::perft::perft_legal;
use crate::moves::move_descriptions::{Move, MoveFlag};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, validate_fen, FenValidation};
use crate::utils::move_notation::move_to_notation;
use crate::utils::pdn::{read_pdn, write_pdn, PdnHeaders, PdnOptions};
use crate::utils::render_game_state::render_game_state;

/// Detailed history entry returned by `history_verbose`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,
    pub side: Color,
    /// Move number before the move was played.
    pub move_number: u16,
    /// Piece that stood on `from` before the move.
    pub piece: Piece,
    pub captures: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    history: Vec<UndoState>,
    headers: PdnHeaders,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            position: Position::starting(),
            history: Vec::new(),
            headers: PdnHeaders::new(),
        }
    }

    /// Start layout for `None`, otherwise the given exchange notation.
    pub fn new(fen: Option<&str>) -> Result<Self, FenError> {
        match fen {
            Some(fen) => Self::from_fen(fen),
            None => Ok(Self::new_game()),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut game = Self::new_game();
        game.try_load(fen)?;
        Ok(game)
    }

    /// Replaces the position. On invalid input the game is left untouched.
    pub fn load(&mut self, fen: &str) -> bool {
        match self.try_load(fen) {
            Ok(()) => true,
            Err(err) => {
                warn!(fen, code = err.code.code(), "rejected FEN");
                false
            }
        }
    }

    pub fn try_load(&mut self, fen: &str) -> Result<(), FenError> {
        let position = parse_fen(fen)?;
        self.position = position;
        self.history.clear();
        self.headers.clear();
        self.sync_setup_headers();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Empty board, White to move, no history and no headers.
    pub fn clear(&mut self) {
        self.position = Position::empty();
        self.history.clear();
        self.headers.clear();
    }

    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(&self.position)
    }

    pub fn validate_fen(fen: &str) -> FenValidation {
        FenValidation::from(validate_fen(fen))
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn move_number(&self) -> u16 {
        self.position.move_number
    }

    #[inline]
    pub fn board(&self) -> &Position {
        &self.position
    }

    /// 51-character board string: side to move, then squares `1..=50`.
    pub fn position(&self) -> String {
        self.position.to_external_string()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.position.piece_on(square)
    }

    /// Places a piece during setup. Refused once a move has been played.
    pub fn put(&mut self, piece: Piece, square: Square) -> bool {
        if !self.history.is_empty() || !self.position.put(square, piece) {
            return false;
        }
        self.sync_setup_headers();
        true
    }

    /// Removes a piece during setup. Refused once a move has been played.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !self.history.is_empty() {
            return None;
        }
        let removed = self.position.remove(square)?;
        self.sync_setup_headers();
        Some(removed)
    }

    pub fn moves(&self) -> Vec<Move> {
        self.collect_moves(|generator, position| generator.generate_legal_moves(position))
    }

    /// Legal moves starting on `square`; capture obligations still apply side-wide.
    pub fn moves_from(&self, square: Square) -> Vec<Move> {
        self.collect_moves(|generator, position| generator.generate_moves_from(position, square))
    }

    /// Longest capture chains available to the side to move.
    pub fn captures(&self) -> Vec<Move> {
        self.collect_moves(|generator, position| generator.generate_captures(position))
    }

    /// Plays the legal move from `from` to `to`, if there is one.
    pub fn make_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.try_move(from, to).ok()
    }

    pub fn try_move(&mut self, from: Square, to: Square) -> MoveGenResult<Move> {
        let legal = LegalMoveGenerator.generate_legal_moves(&self.position)?;
        let mv = legal
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or(MoveGenerationError::IllegalMove { from, to })?;

        let undo = apply_move(&mut self.position, &mv)?;
        let played = undo.mv.clone();
        self.history.push(undo);
        Ok(played)
    }

    pub fn undo(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        undo_move(&mut self.position, &undo);
        Some(undo.mv)
    }

    /// Compact notation of every move played, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(|undo| move_to_notation(&undo.mv)).collect()
    }

    pub fn history_verbose(&self) -> Vec<HistoryRecord> {
        self.history
            .iter()
            .map(|undo| HistoryRecord {
                from: undo.mv.from,
                to: undo.mv.to,
                flag: undo.mv.flag(),
                side: undo.prev_side_to_move,
                move_number: undo.prev_move_number,
                piece: undo.mv.piece,
                captures: undo.mv.takes().to_vec(),
            })
            .collect()
    }

    /// PDN record of the game. Empty if the history cannot be replayed.
    pub fn pdn(&self, options: &PdnOptions) -> String {
        self.try_pdn(options).unwrap_or_else(|err| {
            warn!(error = %err, "PDN export failed");
            String::new()
        })
    }

    pub fn try_pdn(&self, options: &PdnOptions) -> Result<String, PdnError> {
        write_pdn(&self.headers, &self.initial_position(), &self.history, options)
    }

    /// Loads a PDN record. A record that fails anywhere leaves the game as it was.
    pub fn parse_pdn(&mut self, pdn: &str, options: &PdnOptions) -> bool {
        self.try_parse_pdn(pdn, options).is_ok()
    }

    pub fn try_parse_pdn(&mut self, pdn: &str, options: &PdnOptions) -> Result<(), PdnError> {
        match read_pdn(pdn, options) {
            Ok(game) => {
                self.position = game.final_position;
                self.history = game.history;
                self.headers = game.headers;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "PDN parse rolled back");
                Err(err)
            }
        }
    }

    /// Writes each `(key, value)` pair and returns the full header map.
    /// Pairs with an empty key are skipped.
    pub fn header(&mut self, pairs: &[(&str, &str)]) -> &PdnHeaders {
        for (key, value) in pairs {
            if !key.is_empty() {
                self.headers.insert((*key).to_owned(), (*value).to_owned());
            }
        }
        &self.headers
    }

    #[inline]
    pub fn headers(&self) -> &PdnHeaders {
        &self.headers
    }

    pub fn ascii(&self, unicode: bool) -> String {
        render_game_state(&self.position, unicode)
    }

    /// The side to move has no pieces left or no legal move.
    pub fn game_over(&self) -> bool {
        !self.position.has_pieces(self.position.side_to_move) || self.moves().is_empty()
    }

    /// Leaf count of the legal move tree below the current position.
    pub fn perft(&self, depth: u8) -> u64 {
        match perft_legal(&self.position, depth) {
            Ok(counts) => counts.nodes,
            Err(err) => {
                warn!(depth, error = %err, "perft aborted");
                0
            }
        }
    }

    /// Position before the first recorded move.
    fn initial_position(&self) -> Position {
        let mut position = self.position;
        for undo in self.history.iter().rev() {
            undo_move(&mut position, undo);
        }
        position
    }

    fn collect_moves<F>(&self, generate: F) -> Vec<Move>
    where
        F: FnOnce(&LegalMoveGenerator, &Position) -> MoveGenResult<Vec<Move>>,
    {
        generate(&LegalMoveGenerator, &self.position).unwrap_or_else(|err| {
            warn!(error = %err, "move generation failed");
            Vec::new()
        })
    }

    /// `SetUp`/`FEN` describe a non-standard start; only meaningful before the first move.
    fn sync_setup_headers(&mut self) {
        if !self.history.is_empty() {
            return;
        }
        if self.position.has_starting_layout() && self.position.side_to_move == Color::White {
            self.headers.shift_remove("SetUp");
            self.headers.shift_remove("FEN");
        } else {
            self.headers.insert("SetUp".to_owned(), "1".to_owned());
            self.headers.insert("FEN".to_owned(), self.fen());
        }
    }
}
