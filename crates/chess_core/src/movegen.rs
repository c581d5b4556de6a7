//! Pseudo-legal move generation.
//!
//! Moves are produced for whatever piece stands on the requested square; the
//! side to move is never consulted. Filtering out moves that leave the mover
//! in check happens in [`crate::state::get_valid_moves`].

use crate::attacks::{KING_OFFSETS, KNIGHT_OFFSETS, slider_directions};
use crate::state::{GameState, is_valid_castle};
use crate::types::*;

/// Generate all pseudo-legal moves of the piece on `from`.
pub fn generate_piece_moves(state: &GameState, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    generate_piece_moves_into(state, from, &mut out);
    out
}

/// Generate into the provided buffer, reusing it across calls.
pub fn generate_piece_moves_into(state: &GameState, from: Square, out: &mut Vec<Move>) {
    let pc = match state.board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(state, from, pc, out),
        PieceKind::Knight => gen_steps(state, from, pc, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            gen_slider(state, from, pc, slider_directions(pc.kind), out)
        }
        PieceKind::King => {
            gen_steps(state, from, pc, &KING_OFFSETS, out);
            gen_castle(state, from, pc, out);
        }
    }
}

/// Pseudo-legal moves of every piece of `color`.
pub fn generate_color_moves(state: &GameState, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in state.board.pieces_of(color) {
        generate_piece_moves_into(state, from, &mut out);
    }
    out
}

fn push_pawn_move(mv: Move, promotes: bool, out: &mut Vec<Move>) {
    if promotes {
        for pk in PieceKind::PROMOTIONS {
            out.push(mv.with_kind(MoveKind::Promotion(pk)));
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(state: &GameState, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let board = &state.board;
    let dir = pc.color.forward();
    let promo_row = pc.color.promotion_row();

    // forward 1
    if let Some(to) = offset(from, dir, 0)
        && board.is_empty(to)
    {
        push_pawn_move(Move::new(from, to, pc, None), row_of(to) == promo_row, out);

        // forward 2 from start
        if row_of(from) == pc.color.pawn_row()
            && let Some(to2) = offset(from, 2 * dir, 0)
            && board.is_empty(to2)
        {
            out.push(Move::new(from, to2, pc, None));
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = offset(from, dir, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.is_enemy_of(pc) => {
                push_pawn_move(
                    Move::new(from, to, pc, Some(target)),
                    row_of(to) == promo_row,
                    out,
                );
            }
            None if state.en_passant == Some(to) => {
                let victim = sq(row_of(from), col_of(to)).and_then(|s| board.piece_at(s));
                if let Some(victim) = victim
                    && victim.kind == PieceKind::Pawn
                    && victim.is_enemy_of(pc)
                {
                    out.push(Move::new(from, to, pc, Some(victim)).with_kind(MoveKind::EnPassant));
                }
            }
            _ => {}
        }
    }
}

fn gen_steps(state: &GameState, from: Square, pc: Piece, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = offset(from, dr, dc) {
            match state.board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(t) if t.is_enemy_of(pc) => out.push(Move::new(from, to, pc, Some(t))),
                _ => {}
            }
        }
    }
}

fn gen_slider(state: &GameState, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut r = row_of(from) + dr;
        let mut c = col_of(from) + dc;
        while let Some(to) = sq(r, c) {
            match state.board.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(t) if t.is_enemy_of(pc) => {
                    out.push(Move::new(from, to, pc, Some(t)));
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }
}

fn gen_castle(state: &GameState, from: Square, pc: Piece, out: &mut Vec<Move>) {
    for side in CastleSide::BOTH {
        if is_valid_castle(state, from, side, pc.color)
            && let Some(to) = sq(row_of(from), side.king_target_col())
        {
            out.push(Move::new(from, to, pc, None).with_kind(MoveKind::Castle));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
