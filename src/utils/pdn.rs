//! PDN read/write utilities for draughts game records.
//!
//! Serializes headers and move history to PDN text and replays PDN text into
//! a fresh position. Reading never touches a live game: moves are applied to a
//! scratch position and the caller receives the finished record or an error.

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::PdnError;
use crate::game_state::draughts_rules::is_result_token;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_notation::{
    is_ambiguous, move_to_notation, move_to_path_notation, parse_move_token, resolve_move_token,
};

pub type PdnHeaders = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdnOptions {
    /// Maximum movetext line width; `0` disables wrapping.
    pub max_width: usize,
    /// Line separator used when writing, and accepted in addition to `\n` when reading.
    pub newline: String,
}

impl Default for PdnOptions {
    fn default() -> Self {
        Self {
            max_width: 0,
            newline: "\n".to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PdnGame {
    pub headers: PdnHeaders,
    pub initial_position: Position,
    pub history: Vec<UndoState>,
    pub final_position: Position,
    pub result: Option<String>,
}

pub fn write_pdn(
    headers: &PdnHeaders,
    initial_position: &Position,
    history: &[UndoState],
    options: &PdnOptions,
) -> Result<String, PdnError> {
    let newline = options.newline.as_str();
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]{}", key, escape_pdn_value(value), newline));
    }

    let mut units = movetext_units(initial_position, history)?;
    if let Some(result) = headers.get("Result") {
        units.push(result.clone());
    }

    if units.is_empty() {
        return Ok(out);
    }
    if !headers.is_empty() {
        out.push_str(newline);
    }

    out.push_str(&wrap_units(&units, options.max_width, newline));
    Ok(out)
}

/// `N. white` opens every move pair; a record that starts with Black opens with `N... black`.
///
/// History is replayed from `initial_position` so that captures sharing both
/// endpoints with another legal capture are written with their full path.
fn movetext_units(initial_position: &Position, history: &[UndoState]) -> Result<Vec<String>, PdnError> {
    let mut position = *initial_position;
    let mut units = Vec::with_capacity(history.len() + 1);

    for (ply, undo) in history.iter().enumerate() {
        let legal = LegalMoveGenerator
            .generate_legal_moves(&position)
            .map_err(|err| PdnError::Generation(err.to_string()))?;
        let notation = if is_ambiguous(&undo.mv, &legal) {
            move_to_path_notation(&undo.mv)
        } else {
            move_to_notation(&undo.mv)
        };

        units.push(match undo.prev_side_to_move {
            Color::White => format!("{}. {}", undo.prev_move_number, notation),
            Color::Black if ply == 0 => format!("{}... {}", undo.prev_move_number, notation),
            Color::Black => notation,
        });

        apply_move(&mut position, &undo.mv).map_err(|err| PdnError::Generation(err.to_string()))?;
    }

    Ok(units)
}

fn wrap_units(units: &[String], max_width: usize, newline: &str) -> String {
    let mut out = String::new();
    let mut width = 0usize;

    for (idx, unit) in units.iter().enumerate() {
        let len = unit.chars().count();
        if idx > 0 {
            if max_width > 0 && width + 1 + len > max_width {
                out.push_str(newline);
                width = 0;
            } else {
                out.push(' ');
                width += 1;
            }
        }
        out.push_str(unit);
        width += len;
    }

    out
}

pub fn read_pdn(pdn: &str, options: &PdnOptions) -> Result<PdnGame, PdnError> {
    let text = if options.newline.is_empty() || options.newline == "\n" {
        pdn.to_owned()
    } else {
        pdn.replace(options.newline.as_str(), "\n")
    };

    let mut headers = PdnHeaders::new();
    let mut movetext_lines = Vec::<&str>::new();
    let mut in_header = true;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if in_header && trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            in_header = false;
            movetext_lines.push(trimmed);
        }
    }

    let initial_position = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers.get("FEN").ok_or(PdnError::InvalidSetup(None))?;
        parse_fen(fen).map_err(|err| PdnError::InvalidSetup(Some(err)))?
    } else {
        Position::starting()
    };

    let mut position = initial_position;
    let mut history = Vec::<UndoState>::new();
    let mut trailing_result = None;

    let movetext = strip_pdn_comments_and_variations(&movetext_lines.join(" "));
    for raw in movetext.split_whitespace() {
        let token = strip_move_number(raw);
        if token.is_empty() {
            continue;
        }

        if is_result_token(token) {
            trailing_result = Some(token.to_owned());
            break;
        }

        let parsed = parse_move_token(token)?;
        let legal = LegalMoveGenerator
            .generate_legal_moves(&position)
            .map_err(|err| PdnError::Generation(err.to_string()))?;

        let Some(mv) = resolve_move_token(&parsed, &legal) else {
            debug!(token, legal_moves = legal.len(), "PDN move does not match a legal move");
            return Err(PdnError::IllegalMove {
                token: token.to_owned(),
                from: parsed.from,
                to: parsed.to,
                ply: history.len() + 1,
            });
        };

        let undo =
            apply_move(&mut position, mv).map_err(|err| PdnError::Generation(err.to_string()))?;
        history.push(undo);
    }

    if let Some(result) = trailing_result {
        headers.entry("Result".to_owned()).or_insert(result);
    }
    let result = headers.get("Result").cloned();

    Ok(PdnGame {
        headers,
        initial_position,
        history,
        final_position: position,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), PdnError> {
    let invalid = || PdnError::InvalidHeader(line.to_owned());
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(invalid());
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, char::is_whitespace);
    let key = parts.next().ok_or_else(invalid)?.trim();
    let value_raw = parts.next().ok_or_else(invalid)?.trim();

    if key.is_empty() || !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(invalid());
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pdn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' if brace_depth == 0 => paren_depth = paren_depth.saturating_add(1),
            ')' if brace_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drops a leading `N.` or `N...` marker, glued to a move or standing alone.
fn strip_move_number(token: &str) -> &str {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    let rest = &token[digits..];
    if digits > 0 && rest.starts_with('.') {
        rest.trim_start_matches('.')
    } else {
        token
    }
}

fn escape_pdn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::Move;
    use crate::utils::fen_generator::generate_fen;

    const OPENING: &str = "1. 32-28 19-23 2. 28x19 14x23";

    fn read(text: &str) -> PdnGame {
        read_pdn(text, &PdnOptions::default()).expect("PDN should parse")
    }

    #[test]
    fn reads_plain_movetext() {
        let game = read(OPENING);
        assert_eq!(game.history.len(), 4);
        assert_eq!(game.initial_position, Position::starting());
        assert_eq!(game.final_position.piece_on(23), Some(Piece::BLACK_MAN));
        assert_eq!(game.final_position.piece_on(28), None);
        assert_eq!(game.final_position.move_number, 3);
        assert_eq!(game.result, None);
        assert_eq!(game.history[2].mv.takes(), &[23]);
    }

    #[test]
    fn round_trip_with_headers_and_result() {
        let mut headers = PdnHeaders::new();
        headers.insert("Event".to_owned(), "Club \"open\"".to_owned());
        headers.insert("Result".to_owned(), "2-0".to_owned());
        let game = read(OPENING);

        let text = write_pdn(&headers, &game.initial_position, &game.history, &PdnOptions::default())
            .expect("PDN should write");
        assert_eq!(
            text,
            "[Event \"Club \\\"open\\\"\"]\n[Result \"2-0\"]\n\n1. 32-28 19-23 2. 28x19 14x23 2-0"
        );

        let reread = read(&text);
        assert_eq!(reread.headers, headers);
        assert_eq!(reread.result.as_deref(), Some("2-0"));
        assert_eq!(reread.final_position, game.final_position);
    }

    #[test]
    fn wraps_on_unit_boundaries() {
        let game = read(OPENING);
        let options = PdnOptions {
            max_width: 20,
            newline: "\n".to_owned(),
        };
        let text = write_pdn(&PdnHeaders::new(), &game.initial_position, &game.history, &options)
            .expect("PDN should write");
        assert_eq!(text, "1. 32-28 19-23\n2. 28x19 14x23");
        assert!(text.lines().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn custom_newline_marker_round_trips() {
        let game = read(OPENING);
        let mut headers = PdnHeaders::new();
        headers.insert("Site".to_owned(), "Home".to_owned());
        let options = PdnOptions {
            max_width: 16,
            newline: "<br />".to_owned(),
        };
        let text = write_pdn(&headers, &game.initial_position, &game.history, &options)
            .expect("PDN should write");
        assert!(!text.contains('\n'));
        assert!(text.starts_with("[Site \"Home\"]<br /><br />1. 32-28 19-23<br />"));

        let reread = read_pdn(&text, &options).expect("PDN should parse");
        assert_eq!(reread.history.len(), 4);
        assert_eq!(reread.headers.get("Site").map(String::as_str), Some("Home"));
    }

    #[test]
    fn ignores_comments_variations_and_glued_numbers() {
        let text = "1.32-28 {a quiet start} 19-23 (1... 17-21 2. 37-32 (2. 34-30)) 2.28x19 14x23 *";
        let game = read(text);
        assert_eq!(game.history.len(), 4);
        assert_eq!(game.result.as_deref(), Some("*"));
        assert_eq!(game.headers.get("Result").map(String::as_str), Some("*"));
    }

    #[test]
    fn header_result_wins_over_trailing_token() {
        let game = read("[Result \"0-2\"]\n\n1. 32-28 1-1");
        assert_eq!(game.result.as_deref(), Some("0-2"));
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn setup_header_starts_from_fen() {
        let game = read("[SetUp \"1\"]\n[FEN \"B:W28:B19,23\"]\n\n1... 23x32");
        assert_eq!(generate_fen(&game.initial_position), "B:W28:B19,23");
        assert_eq!(game.history.len(), 1);
        assert_eq!(generate_fen(&game.final_position), "W:W:B19,32");

        let written = write_pdn(&game.headers, &game.initial_position, &game.history, &PdnOptions::default())
            .expect("PDN should write");
        assert!(written.ends_with("1... 23x32"));
    }

    #[test]
    fn setup_without_valid_fen_fails() {
        let missing = read_pdn("[SetUp \"1\"]\n\n1. 32-28", &PdnOptions::default());
        assert_eq!(missing.unwrap_err(), PdnError::InvalidSetup(None));

        let invalid = read_pdn("[SetUp \"1\"]\n[FEN \"garbage\"]\n", &PdnOptions::default());
        assert!(matches!(invalid, Err(PdnError::InvalidSetup(Some(_)))));
    }

    #[test]
    fn illegal_or_malformed_moves_fail() {
        let illegal = read_pdn("1. 32-28 19-23 2. 35-30", &PdnOptions::default());
        assert!(matches!(
            illegal,
            Err(PdnError::IllegalMove {
                from: 35,
                to: 30,
                ply: 3,
                ..
            })
        ));

        let malformed = read_pdn("1. 32-28 hello", &PdnOptions::default());
        assert!(matches!(malformed, Err(PdnError::InvalidMoveToken(_))));

        let header = read_pdn("[Event]\n1. 32-28", &PdnOptions::default());
        assert!(matches!(header, Err(PdnError::InvalidHeader(_))));
    }

    #[test]
    fn empty_record_writes_headers_only() {
        let mut headers = PdnHeaders::new();
        headers.insert("Event".to_owned(), "Casual".to_owned());
        assert_eq!(
            write_pdn(&headers, &Position::starting(), &[], &PdnOptions::default()).expect("PDN should write"),
            "[Event \"Casual\"]\n"
        );
        assert_eq!(
            write_pdn(&PdnHeaders::new(), &Position::starting(), &[], &PdnOptions::default())
                .expect("PDN should write"),
            ""
        );
    }

    #[test]
    fn ambiguous_captures_are_written_with_their_path() {
        let fen = "W:WK37:B21,22,31,32";
        let initial = parse_fen(fen).expect("test FEN should parse");
        let legal = LegalMoveGenerator
            .generate_legal_moves(&initial)
            .expect("generation should succeed");
        let loops: Vec<&Move> = legal.iter().filter(|mv| mv.from == 37 && mv.to == 37).collect();
        assert_eq!(loops.len(), 2);

        let chosen = loops
            .iter()
            .find(|mv| mv.jumps()[1] == 28)
            .expect("clockwise loop should exist");
        let mut position = initial;
        let undo = apply_move(&mut position, chosen).expect("loop should apply");

        let text = write_pdn(&PdnHeaders::new(), &initial, &[undo], &PdnOptions::default())
            .expect("PDN should write");
        assert_eq!(text, "1. 37x28x17x26x37");

        let game = read(&format!("[SetUp \"1\"]\n[FEN \"{fen}\"]\n\n{text}"));
        assert_eq!(game.history[0].mv.jumps(), vec![37, 28, 17, 26, 37]);
        assert_eq!(generate_fen(&game.final_position), "B:WK37:B");
    }
}
