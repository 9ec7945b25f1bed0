//! Exchange-notation (FEN) validation and decoding.
//!
//! Accepts `<turn>:<color><squares>:<color><squares>` where each square entry
//! is a number, a `K`-prefixed number for kings, or an inclusive `a-b` range.
//! Whitespace is ignored and anything from the first `.` onwards is dropped.

use crate::errors::{FenError, FenErrorCode};
use crate::game_state::draughts_rules::{BOARD_SQUARES, EMPTY_POSITION_FENS};
use crate::game_state::draughts_types::*;

/// Outcome of `validate_fen`, mirroring the non-throwing public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenValidation {
    pub valid: bool,
    pub error: Option<FenError>,
}

impl FenValidation {
    /// `0` when valid, otherwise the stable error code.
    pub fn code(&self) -> u8 {
        self.error.as_ref().map(|e| e.code.code()).unwrap_or(0)
    }

    pub fn message(&self) -> &'static str {
        self.error
            .as_ref()
            .map(|e| e.code.message())
            .unwrap_or("no errors")
    }
}

impl From<Result<(), FenError>> for FenValidation {
    fn from(result: Result<(), FenError>) -> Self {
        match result {
            Ok(()) => FenValidation {
                valid: true,
                error: None,
            },
            Err(error) => FenValidation {
                valid: false,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SquareRun {
    first: Square,
    last: Square,
    king: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FenFields {
    side_to_move: Color,
    sides: Vec<(Color, Vec<SquareRun>)>,
}

pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    parse_fen_fields(fen).map(|_| ())
}

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields = parse_fen_fields(fen)?;

    let mut position = Position::empty();
    position.side_to_move = fields.side_to_move;

    for (color, runs) in fields.sides {
        for run in runs {
            let kind = if run.king { PieceKind::King } else { PieceKind::Man };
            // A reversed range expands to nothing.
            for square in run.first..=run.last {
                position.put(square, Piece::new(color, kind));
            }
        }
    }

    Ok(position)
}

fn parse_fen_fields(fen: &str) -> Result<FenFields, FenError> {
    let compact: String = fen.chars().filter(|c| !c.is_whitespace()).collect();
    let fail = |code: FenErrorCode| FenError::new(code, fen);

    if EMPTY_POSITION_FENS.contains(&compact.as_str()) {
        return Ok(FenFields {
            side_to_move: parse_side_to_move(&compact[..1]).map_err(fail)?,
            sides: Vec::new(),
        });
    }

    let body = match compact.find('.') {
        Some(idx) => &compact[..idx],
        None => compact.as_str(),
    };

    if body.is_empty() {
        return Err(fail(FenErrorCode::Empty));
    }
    if body.chars().nth(1) != Some(':') {
        return Err(fail(FenErrorCode::MissingColon));
    }

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 3 {
        return Err(fail(FenErrorCode::WrongColonCount));
    }

    let side_to_move = parse_side_to_move(parts[0]).map_err(fail)?;

    let first = side_color(parts[1]);
    let second = side_color(parts[2]);
    match (first, second) {
        (Some(a), Some(b)) if a != b => {}
        _ => return Err(fail(FenErrorCode::InvalidSideColors)),
    }

    let mut sides = Vec::with_capacity(2);
    for part in &parts[1..] {
        let color = side_color(part).ok_or_else(|| fail(FenErrorCode::InvalidSideColors))?;
        let runs = parse_square_list(&part[1..]).map_err(fail)?;
        sides.push((color, runs));
    }

    Ok(FenFields {
        side_to_move,
        sides,
    })
}

/// `?` (unknown side) is accepted and treated as White.
fn parse_side_to_move(field: &str) -> Result<Color, FenErrorCode> {
    match field {
        "W" | "?" => Ok(Color::White),
        "B" => Ok(Color::Black),
        _ => Err(FenErrorCode::InvalidSideToMove),
    }
}

fn side_color(part: &str) -> Option<Color> {
    match part.chars().next()? {
        'W' => Some(Color::White),
        'B' => Some(Color::Black),
        _ => None,
    }
}

fn parse_square_list(list: &str) -> Result<Vec<SquareRun>, FenErrorCode> {
    if list.is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|entry| {
            let (king, squares) = match entry.strip_prefix('K') {
                Some(rest) => (true, rest),
                None => (false, entry),
            };

            let bounds: Vec<&str> = squares.split('-').collect();
            match bounds.as_slice() {
                [first, last] => Ok(SquareRun {
                    first: parse_square_number(first)?,
                    last: parse_square_number(last)?,
                    king,
                }),
                _ => {
                    let square = parse_square_number(squares)?;
                    Ok(SquareRun {
                        first: square,
                        last: square,
                        king,
                    })
                }
            }
        })
        .collect()
}

fn parse_square_number(text: &str) -> Result<Square, FenErrorCode> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenErrorCode::SquareNotInteger);
    }

    let value: u32 = text.parse().map_err(|_| FenErrorCode::SquareOutOfRange)?;
    if !(1..=BOARD_SQUARES as u32).contains(&value) {
        return Err(FenErrorCode::SquareOutOfRange);
    }

    Ok(value as Square)
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, validate_fen, FenValidation};
    use crate::errors::FenErrorCode;
    use crate::game_state::draughts_rules::STARTING_POSITION_FEN;
    use crate::game_state::draughts_types::*;

    fn error_code(fen: &str) -> FenErrorCode {
        validate_fen(fen).expect_err("FEN should be rejected").code
    }

    #[test]
    fn starting_fen_matches_starting_layout() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position, Position::starting());
    }

    #[test]
    fn kings_lists_and_ranges() {
        let position = parse_fen("B:WK4,31-33:BK46-47,9").expect("FEN should parse");
        assert_eq!(position.side_to_move, Color::Black);
        assert_eq!(position.piece_on(4), Some(Piece::WHITE_KING));
        assert_eq!(position.piece_on(32), Some(Piece::WHITE_MAN));
        assert_eq!(position.piece_on(47), Some(Piece::BLACK_KING));
        assert_eq!(position.piece_on(9), Some(Piece::BLACK_MAN));
        assert_eq!(position.pieces().count(), 7);
    }

    #[test]
    fn side_order_and_whitespace_are_flexible() {
        let a = parse_fen("W:B1-20:W31-50").expect("FEN should parse");
        let b = parse_fen(" W : W31-50 : B1-20 ").expect("FEN should parse");
        assert_eq!(a, Position::starting());
        assert_eq!(b, Position::starting());
    }

    #[test]
    fn trailing_dot_suffix_is_ignored() {
        let position = parse_fen("W:W31-50:B1-20.").expect("FEN should parse");
        assert_eq!(position, Position::starting());
    }

    #[test]
    fn empty_side_strings_decode_to_empty_boards() {
        for fen in ["W::", "B::", "?::"] {
            let position = parse_fen(fen).expect("empty FEN should parse");
            assert_eq!(position.pieces().count(), 0, "{fen}");
        }
        assert_eq!(
            parse_fen("B::").expect("empty FEN should parse").side_to_move,
            Color::Black
        );
        assert_eq!(
            parse_fen("?:W:B").expect("unknown side should parse").side_to_move,
            Color::White
        );
    }

    #[test]
    fn reversed_range_is_valid_but_empty() {
        let position = parse_fen("W:W40-31:B1").expect("FEN should parse");
        assert!(!position.has_pieces(Color::White));
    }

    #[test]
    fn each_rule_has_its_own_code() {
        assert_eq!(error_code("garbage"), FenErrorCode::MissingColon);
        assert_eq!(error_code("W:W31-50"), FenErrorCode::WrongColonCount);
        assert_eq!(error_code("W:W1:B2:"), FenErrorCode::WrongColonCount);
        assert_eq!(error_code("X:W31-50:B1-20"), FenErrorCode::InvalidSideToMove);
        assert_eq!(error_code("W:W31-50:W1-20"), FenErrorCode::InvalidSideColors);
        assert_eq!(error_code("W:X31-50:B1-20"), FenErrorCode::InvalidSideColors);
        assert_eq!(error_code("W:W31,a:B1-20"), FenErrorCode::SquareNotInteger);
        assert_eq!(error_code("W:W31,:B1-20"), FenErrorCode::SquareNotInteger);
        assert_eq!(error_code("W:W1-2-3:B4"), FenErrorCode::SquareNotInteger);
        assert_eq!(error_code("W:W31-51:B1-20"), FenErrorCode::SquareOutOfRange);
        assert_eq!(error_code("W:W0:B1"), FenErrorCode::SquareOutOfRange);
        assert_eq!(error_code("W:W99999999999:B1"), FenErrorCode::SquareOutOfRange);
        assert_eq!(error_code(""), FenErrorCode::Empty);
        assert_eq!(error_code("   "), FenErrorCode::Empty);
    }

    #[test]
    fn validation_value_reports_codes() {
        let ok = FenValidation::from(validate_fen("W:W31-50:B1-20"));
        assert!(ok.valid);
        assert_eq!(ok.code(), 0);
        assert_eq!(ok.message(), "no errors");

        let bad = FenValidation::from(validate_fen("garbage"));
        assert!(!bad.valid);
        assert_eq!(bad.code(), 1);
        assert_eq!(bad.message(), "fen position has not colon at second position");
    }
}
