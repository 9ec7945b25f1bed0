//! Error types shared by the notation codecs and the game facade.
//!
//! Exchange-notation failures carry a stable numeric code so callers can
//! branch on them programmatically; game-notation failures name the token or
//! header line that could not be resolved.

use thiserror::Error;

use crate::game_state::draughts_types::Square;

/// Stable identifiers for every exchange-notation rule a FEN can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenErrorCode {
    MissingColon,
    WrongColonCount,
    InvalidSideToMove,
    InvalidSideColors,
    SquareNotInteger,
    SquareOutOfRange,
    Empty,
}

impl FenErrorCode {
    /// Numeric code reported by `validate_fen`. Code `0` is reserved for "no errors".
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            FenErrorCode::MissingColon => 1,
            FenErrorCode::WrongColonCount => 2,
            FenErrorCode::InvalidSideToMove => 3,
            FenErrorCode::InvalidSideColors => 4,
            FenErrorCode::SquareNotInteger => 5,
            FenErrorCode::SquareOutOfRange => 6,
            FenErrorCode::Empty => 7,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            FenErrorCode::MissingColon => "fen position has not colon at second position",
            FenErrorCode::WrongColonCount => "fen position has not 2 colons",
            FenErrorCode::InvalidSideToMove => "side to move of fen position not valid",
            FenErrorCode::InvalidSideColors => "color(s) of sides of fen position not valid",
            FenErrorCode::SquareNotInteger => "squares of fen position not integer",
            FenErrorCode::SquareOutOfRange => "squares of fen position not valid",
            FenErrorCode::Empty => "empty fen position",
        }
    }
}

/// A rejected exchange-notation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} (code {}): {fen:?}", .code.message(), .code.code())]
pub struct FenError {
    pub code: FenErrorCode,
    pub fen: String,
}

impl FenError {
    pub fn new(code: FenErrorCode, fen: &str) -> Self {
        Self {
            code,
            fen: fen.to_owned(),
        }
    }
}

/// Failures while decoding a game-notation document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdnError {
    #[error("invalid PDN header line: {0}")]
    InvalidHeader(String),

    #[error("SetUp header present but FEN is missing or invalid")]
    InvalidSetup(#[source] Option<FenError>),

    #[error("unreadable move token: {0}")]
    InvalidMoveToken(String),

    #[error("move {from}-{to} (token {token:?}) is not legal at ply {ply}")]
    IllegalMove {
        token: String,
        from: Square,
        to: Square,
        ply: usize,
    },

    #[error("move generation failed during replay: {0}")]
    Generation(String),
}
