//! Core value types for the 10x10 international draughts board.
//!
//! Two square numberings coexist: public squares (`Square`, `1..=50`) used by
//! notation and the API, and internal padded indices (`InternalSquare`,
//! `0..=55`) where every multiple of 11 is an off-board border cell.
use std::fmt;

pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::UndoState;

/// Public square number (`1..=50`).
pub type Square = u8;

/// Index into the padded 56-cell board buffer.
pub type InternalSquare = usize;

/// Side to move. Rendered as uppercase `W` / `B` at every text boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Accepts either case.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'W' | 'w' => Some(Color::White),
            'B' | 'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board: men are lowercase (`w`, `b`), kings uppercase (`W`, `B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const WHITE_MAN: Piece = Piece::new(Color::White, PieceKind::Man);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const BLACK_MAN: Piece = Piece::new(Color::Black, PieceKind::Man);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn is_man(self) -> bool {
        matches!(self.kind, PieceKind::Man)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn promoted(self) -> Self {
        Piece::new(self.color, PieceKind::King)
    }

    pub fn to_char(self) -> char {
        let base = self.color.to_char();
        match self.kind {
            PieceKind::Man => base.to_ascii_lowercase(),
            PieceKind::King => base,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let color = Color::from_char(ch)?;
        let kind = if ch.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece::new(color, kind))
    }

    /// Draughts glyphs from the Unicode "Miscellaneous Symbols" block.
    pub fn to_unicode(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Man) => '\u{26C0}',
            (Color::White, PieceKind::King) => '\u{26C1}',
            (Color::Black, PieceKind::Man) => '\u{26C2}',
            (Color::Black, PieceKind::King) => '\u{26C3}',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Contents of one slot of the padded board buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Border,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Border => '-',
            Cell::Occupied(piece) => piece.to_char(),
        }
    }
}

/// Diagonal directions, named after compass points with White moving north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

impl Direction {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::NorthEast => 0,
            Direction::SouthEast => 1,
            Direction::SouthWest => 2,
            Direction::NorthWest => 3,
        }
    }

    /// Internal-index delta for one diagonal step.
    #[inline]
    pub const fn step(self) -> isize {
        match self {
            Direction::NorthEast => -5,
            Direction::SouthEast => 6,
            Direction::SouthWest => 5,
            Direction::NorthWest => -6,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Non-capturing man steps: White goes north, Black goes south.
    #[inline]
    pub const fn is_forward_for(self, color: Color) -> bool {
        match color {
            Color::White => matches!(self, Direction::NorthEast | Direction::NorthWest),
            Color::Black => matches!(self, Direction::SouthEast | Direction::SouthWest),
        }
    }
}
