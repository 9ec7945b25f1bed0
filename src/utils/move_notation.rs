//! Half-move tokens: `32-28` for a step, `28x19` for a capture.
//!
//! Notation only states the endpoints of a capture (optionally its
//! intermediate landing squares, `28x19x10`), so a token is resolved against
//! the legal move list to recover the captured squares.

use crate::errors::PdnError;
use crate::game_state::draughts_types::Square;
use crate::game_state::square_numbering::is_valid_square;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToken {
    pub from: Square,
    pub to: Square,
    /// Landing squares written between the endpoints of a capture.
    pub via: Vec<Square>,
    pub capture: bool,
}

pub fn move_to_notation(mv: &Move) -> String {
    mv.to_string()
}

/// Every visited square of a capture, `37x28x17x26x37`; simple moves as usual.
pub fn move_to_path_notation(mv: &Move) -> String {
    if !mv.is_capture() {
        return move_to_notation(mv);
    }
    mv.jumps()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("x")
}

/// Another legal move shares both endpoints with `mv`.
pub fn is_ambiguous(mv: &Move, legal_moves: &[Move]) -> bool {
    legal_moves
        .iter()
        .filter(|other| other.from == mv.from && other.to == mv.to)
        .nth(1)
        .is_some()
}

pub fn parse_move_token(token: &str) -> Result<MoveToken, PdnError> {
    let invalid = || PdnError::InvalidMoveToken(token.to_owned());
    let cleaned = trim_annotation_suffix(token);

    let capture = cleaned.contains('x');
    let separator = if capture { 'x' } else { '-' };
    if capture && cleaned.contains('-') {
        return Err(invalid());
    }

    let squares = cleaned
        .split(separator)
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let square: Square = part.parse().map_err(|_| invalid())?;
            if is_valid_square(square) {
                Ok(square)
            } else {
                Err(invalid())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    match squares.as_slice() {
        [from, to] => Ok(MoveToken {
            from: *from,
            to: *to,
            via: Vec::new(),
            capture,
        }),
        [from, via @ .., to] if capture && !via.is_empty() => Ok(MoveToken {
            from: *from,
            to: *to,
            via: via.to_vec(),
            capture,
        }),
        _ => Err(invalid()),
    }
}

/// Picks the legal move a token names. The separator is not trusted: a `-`
/// token still resolves to a capture when that is the only way between the
/// two squares.
pub fn resolve_move_token<'a>(token: &MoveToken, legal_moves: &'a [Move]) -> Option<&'a Move> {
    legal_moves
        .iter()
        .filter(|mv| mv.from == token.from && mv.to == token.to)
        .find(|mv| visits_in_order(mv, &token.via))
}

fn visits_in_order(mv: &Move, via: &[Square]) -> bool {
    if via.is_empty() {
        return true;
    }
    let jumps = mv.jumps();
    let inner = jumps.get(1..jumps.len().saturating_sub(1)).unwrap_or(&[]);
    let mut remaining = via.iter().peekable();
    for square in inner {
        if remaining.peek() == Some(&square) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?' | '*'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::Position;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::fen_parser::parse_fen;

    fn legal(position: &Position) -> Vec<Move> {
        LegalMoveGenerator
            .generate_legal_moves(position)
            .expect("generation should succeed")
    }

    #[test]
    fn parses_simple_and_capture_tokens() {
        assert_eq!(
            parse_move_token("32-28").expect("token should parse"),
            MoveToken {
                from: 32,
                to: 28,
                via: Vec::new(),
                capture: false
            }
        );
        let capture = parse_move_token("28x19!").expect("token should parse");
        assert!(capture.capture);
        assert_eq!((capture.from, capture.to), (28, 19));

        let multi = parse_move_token("28x19x10").expect("token should parse");
        assert_eq!((multi.from, multi.to), (28, 10));
        assert_eq!(multi.via, vec![19]);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "32", "32-", "a-b", "0-5", "32-51", "32-28-23", "32x28-23", "3 2-28"] {
            assert!(parse_move_token(token).is_err(), "{token:?}");
        }
    }

    #[test]
    fn resolves_against_legal_moves() {
        let position = Position::starting();
        let moves = legal(&position);
        let token = parse_move_token("32-28").expect("token should parse");
        let mv = resolve_move_token(&token, &moves).expect("move should resolve");
        assert_eq!(move_to_notation(mv), "32-28");

        let missing = parse_move_token("35-36").expect("token should parse");
        assert!(resolve_move_token(&missing, &moves).is_none());
    }

    #[test]
    fn recovers_captured_squares() {
        let position = parse_fen("W:W32:B19,28").expect("test FEN should parse");
        let moves = legal(&position);
        // Written with a dash, still resolved to the capture.
        let token = parse_move_token("32-14").expect("token should parse");
        let mv = resolve_move_token(&token, &moves).expect("capture should resolve");
        assert_eq!(mv.takes(), &[28, 19]);
        assert_eq!(move_to_notation(mv), "32x14");

        assert!(!is_ambiguous(mv, &moves));
        assert_eq!(move_to_path_notation(mv), "32x23x14");

        let with_via = parse_move_token("32x23x14").expect("token should parse");
        assert!(resolve_move_token(&with_via, &moves).is_some());
        let wrong_via = parse_move_token("32x24x14").expect("token should parse");
        assert!(resolve_move_token(&wrong_via, &moves).is_none());
    }
}
