//! Move records shared by generation, execution, history, and notation.
//!
//! All squares stored here use public numbering (`1..=50`).

use std::fmt;

use crate::game_state::draughts_types::{Piece, Square};

/// Pieces jumped by one capturing move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureChain {
    /// Squares visited in order, starting with the origin.
    pub jumps: Vec<Square>,
    /// Captured squares in jump order.
    pub takes: Vec<Square>,
    /// Pieces that stood on `takes` before the move, index-aligned.
    pub pieces_taken: Vec<Piece>,
}

impl CaptureChain {
    #[inline]
    pub fn len(&self) -> usize {
        self.takes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.takes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple,
    Capture(CaptureChain),
}

/// Coarse classification used by history output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Normal,
    Capture,
    Promotion,
}

impl MoveFlag {
    pub const fn to_char(self) -> char {
        match self {
            MoveFlag::Normal => 'n',
            MoveFlag::Capture => 'c',
            MoveFlag::Promotion => 'p',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece standing on `from` before the move.
    pub piece: Piece,
    pub kind: MoveKind,
    /// The moving man ends on its promotion row.
    pub promotes: bool,
}

impl Move {
    pub fn simple(from: Square, to: Square, piece: Piece, promotes: bool) -> Self {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Simple,
            promotes,
        }
    }

    pub fn capture(chain: CaptureChain, piece: Piece, promotes: bool) -> Self {
        let from = chain.jumps.first().copied().unwrap_or_default();
        let to = chain.jumps.last().copied().unwrap_or_default();
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Capture(chain),
            promotes,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(&self.kind, MoveKind::Capture(chain) if !chain.is_empty())
    }

    pub fn chain(&self) -> Option<&CaptureChain> {
        match &self.kind {
            MoveKind::Capture(chain) => Some(chain),
            MoveKind::Simple => None,
        }
    }

    pub fn takes(&self) -> &[Square] {
        self.chain().map(|c| c.takes.as_slice()).unwrap_or(&[])
    }

    pub fn pieces_taken(&self) -> &[Piece] {
        self.chain().map(|c| c.pieces_taken.as_slice()).unwrap_or(&[])
    }

    /// Visited squares including the origin; a simple move yields `[from, to]`.
    pub fn jumps(&self) -> Vec<Square> {
        match &self.kind {
            MoveKind::Capture(chain) => chain.jumps.clone(),
            MoveKind::Simple => vec![self.from, self.to],
        }
    }

    /// Promotion wins over capture, matching how history reports mixed moves.
    pub fn flag(&self) -> MoveFlag {
        if self.promotes {
            MoveFlag::Promotion
        } else if self.is_capture() {
            MoveFlag::Capture
        } else {
            MoveFlag::Normal
        }
    }

    #[inline]
    pub fn separator(&self) -> char {
        if self.is_capture() {
            'x'
        } else {
            '-'
        }
    }
}

impl fmt::Display for Move {
    /// Compact notation: `35-30`, `28x19`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.separator(), self.to)
    }
}
