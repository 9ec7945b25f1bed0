//! Crate root module declarations for the international draughts rules engine.
//!
//! This file exposes the board model, move generation, notation codecs and the
//! game facade so tests, benches, and external tooling can import stable
//! module paths.

pub mod errors;

pub mod game_state {
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_state;
    pub mod position;
    pub mod square_numbering;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod capture_search;
    pub mod direction_scan;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
    pub mod pdn;
    pub mod render_game_state;
}
