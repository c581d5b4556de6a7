//! Text forms of moves for logs and move lists.

use crate::types::*;

/// Coordinate notation: `e2e4`, `e7e8q`.
pub fn move_to_coord(mv: &Move) -> String {
    let mut s = format!("{}{}", square_name(mv.from), square_name(mv.to));
    if let Some(pk) = mv.promotion() {
        s.push(pk.letter());
    }
    s
}

/// Move-list entry: move number on white's moves, the piece glyph, origin,
/// `x` for captures or `-` otherwise, destination. E.g. `1.♙e2-e4`, `♞b8-c6`.
pub fn move_list_entry(mv: &Move, move_number: u32) -> String {
    let number = if mv.piece.color == Color::White {
        format!("{move_number}.")
    } else {
        String::new()
    };
    let sep = if mv.is_capture() { 'x' } else { '-' };
    let mut s = format!(
        "{number}{}{}{sep}{}",
        mv.piece.symbol(),
        square_name(mv.from),
        square_name(mv.to)
    );
    if let Some(pk) = mv.promotion() {
        s.push('=');
        s.push(Piece::new(mv.piece.color, pk).symbol());
    }
    s
}

/// Short debug form used by search logs: piece letter plus coordinates, `Ne2-e4`.
pub fn move_label(mv: &Move) -> String {
    format!(
        "{}{}-{}",
        mv.piece.kind.letter().to_ascii_uppercase(),
        square_name(mv.from),
        square_name(mv.to)
    )
}

pub fn line_to_string(line: &[Move]) -> String {
    line.iter().map(move_label).collect::<Vec<_>>().join(" ")
}
