//! Square reachability and path clearance.
//!
//! These are the geometric primitives shared by move generation, check
//! detection, castling validation and evaluation. None of them consult whose
//! turn it is or whether the attacker's own king would be exposed.

use crate::board::Board;
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Sliding directions of a piece kind; empty for non-sliders.
pub fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &DIAGONALS,
        PieceKind::Rook => &ORTHOGONALS,
        PieceKind::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

/// Unit step from `from` toward `to` when they share a row, column or diagonal.
pub fn direction(from: Square, to: Square) -> Option<(i8, i8)> {
    if from == to {
        return None;
    }
    let dr = row_of(to) - row_of(from);
    let dc = col_of(to) - col_of(from);
    if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        Some((dr.signum(), dc.signum()))
    } else {
        None
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Adjacent squares have nothing in between and are trivially clear.
/// Squares that share no row, column or diagonal have no path at all and
/// return false.
pub fn path_is_empty(board: &Board, from: Square, to: Square) -> bool {
    let Some((dr, dc)) = direction(from, to) else {
        return false;
    };
    let mut r = row_of(from) + dr;
    let mut c = col_of(from) + dc;
    while let Some(s) = sq(r, c) {
        if s == to {
            return true;
        }
        if !board.is_empty(s) {
            return false;
        }
        r += dr;
        c += dc;
    }
    true
}

/// Whether `piece` standing on `from` bears on `to`, whatever occupies `to`.
///
/// This is the raw geometry behind both attacks and defence: a pawn covers
/// its two forward diagonals even when they are empty, sliders need a clear
/// path, knights and kings only need the offset to match.
pub fn covers_square(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let dr = row_of(to) - row_of(from);
    let dc = col_of(to) - col_of(from);
    match piece.kind {
        PieceKind::Pawn => dr == piece.color.forward() && dc.abs() == 1,
        PieceKind::Knight => (dr.abs() == 1 && dc.abs() == 2) || (dr.abs() == 2 && dc.abs() == 1),
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        PieceKind::Bishop => dr.abs() == dc.abs() && path_is_empty(board, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_is_empty(board, from, to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && path_is_empty(board, from, to)
        }
    }
}

/// Pseudo-legal attack test: `attacker` on `from` could capture on `to`.
///
/// The destination may be empty or hold an enemy piece, never a friendly one.
pub fn can_attack(board: &Board, attacker: Piece, from: Square, to: Square) -> bool {
    if let Some(target) = board.piece_at(to)
        && target.is_same_color(attacker)
    {
        return false;
    }
    covers_square(board, attacker, from, to)
}

/// True iff some piece of `by` can attack `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, pc)| can_attack(board, pc, from, target))
}

/// True iff some piece of `by` other than the one on `target` covers `target`.
///
/// Unlike [`is_square_attacked`] this counts a friendly occupant, so it
/// answers "is the piece on `target` protected".
pub fn is_square_defended(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, pc)| from != target && covers_square(board, pc, from, target))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
