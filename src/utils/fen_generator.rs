use crate::game_state::draughts_types::*;

/// Encodes a position: side to move, White's squares, then Black's, ascending,
/// kings prefixed with `K`, never using ranges.
pub fn generate_fen(position: &Position) -> String {
    format!(
        "{}:W{}:B{}",
        position.side_to_move.to_char(),
        generate_side_field(position, Color::White),
        generate_side_field(position, Color::Black)
    )
}

fn generate_side_field(position: &Position, color: Color) -> String {
    position
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(square, piece)| {
            if piece.is_king() {
                format!("K{square}")
            } else {
                square.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
