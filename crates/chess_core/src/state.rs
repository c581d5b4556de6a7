//! Game state snapshots and the single transition between them.
//!
//! A [`GameState`] is never mutated once built: [`apply_move`] reads one state
//! and returns the next. Legality is decided by playing a move speculatively
//! and checking the mover's king afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::attacks::{is_square_attacked, path_is_empty};
use crate::board::{Board, CastlingRights, king_home, rook_home};
use crate::error::{RulesError, RulesResult};
use crate::movegen::generate_piece_moves;
use crate::types::*;

/// The parts of a state that decide whether two positions are "the same"
/// for repetition purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RepetitionKey {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped over on the previous ply.
    pub en_passant: Option<Square>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Occurrences of earlier positions since the last irreversible move.
    /// The current position is not included.
    repetitions: Arc<HashMap<RepetitionKey, u32>>,
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_parts(Board::startpos(), Color::White, CastlingRights::ALL, None, 0, 1)
    }

    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        Self {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            repetitions: Arc::new(HashMap::new()),
        }
    }

    pub fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            board: self.board,
            turn: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// How many times the current position has occurred, this one included.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.repetition_key())
            .copied()
            .unwrap_or(0)
            + 1
    }

    /// Recorded occurrences of earlier positions.
    pub fn repetition_history(&self) -> &HashMap<RepetitionKey, u32> {
        &self.repetitions
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn king_square(&self, color: Color) -> RulesResult<Square> {
        self.board
            .king_square(color)
            .ok_or(RulesError::MissingKing { color })
    }

    pub fn in_check(&self, color: Color) -> RulesResult<bool> {
        is_in_check(self, color)
    }

    pub fn apply(&self, mv: &Move) -> RulesResult<GameState> {
        apply_move(self, mv)
    }

    pub fn valid_moves(&self) -> RulesResult<Vec<Move>> {
        get_valid_moves(self, self.turn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial state of a new game.
pub fn initialize_game() -> GameState {
    GameState::new()
}

/// Whether `color`'s king is attacked. A missing king is an error, never "not in check".
pub fn is_in_check(state: &GameState, color: Color) -> RulesResult<bool> {
    let ksq = state.king_square(color)?;
    Ok(is_square_attacked(&state.board, ksq, color.other()))
}

/// Full castling precondition for `color` castling on `side` with the king on `king_sq`.
pub fn is_valid_castle(state: &GameState, king_sq: Square, side: CastleSide, color: Color) -> bool {
    let board = &state.board;
    if king_sq != king_home(color)
        || board.piece_at(king_sq) != Some(Piece::new(color, PieceKind::King))
    {
        return false;
    }
    let Some(rook_sq) = rook_home(color, side) else {
        return false;
    };
    if board.piece_at(rook_sq) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }
    if !state.castling.get(color, side) {
        return false;
    }
    if !path_is_empty(board, king_sq, rook_sq) {
        return false;
    }

    // Start, transit and landing squares must all be safe; the start square
    // covers "not castling out of check".
    let enemy = color.other();
    let row = row_of(king_sq);
    let (lo, hi) = {
        let a = col_of(king_sq);
        let b = side.king_target_col();
        (a.min(b), a.max(b))
    };
    (lo..=hi).all(|c| match sq(row, c) {
        Some(s) => !is_square_attacked(board, s, enemy),
        None => false,
    })
}

/// Plays `mv` on `state`, returning the successor state.
pub fn apply_move(state: &GameState, mv: &Move) -> RulesResult<GameState> {
    advance(state, mv, true)
}

/// Shared transition. `record_history` is off for speculative legality probes,
/// which only look at the resulting board.
fn advance(state: &GameState, mv: &Move, record_history: bool) -> RulesResult<GameState> {
    if state.board.piece_at(mv.from) != Some(mv.piece) {
        return Err(RulesError::InvalidMove {
            from: mv.from,
            to: mv.to,
        });
    }

    let mut next = state.clone();
    next.en_passant = None;

    let color = mv.piece.color;
    let board = &mut next.board;
    let mut captured = state.board.piece_at(mv.to);

    match mv.kind {
        MoveKind::Castle => {
            let side = CastleSide::from_king_target(col_of(mv.to)).ok_or(
                RulesError::InvalidMove {
                    from: mv.from,
                    to: mv.to,
                },
            )?;
            let rook = Piece::new(color, PieceKind::Rook);
            let row = row_of(mv.from);
            let (rook_from, rook_to) = match (rook_home(color, side), sq(row, side.rook_target_col())) {
                (Some(f), Some(t)) => (f, t),
                _ => {
                    return Err(RulesError::InvalidMove {
                        from: mv.from,
                        to: mv.to,
                    });
                }
            };

            board.set_piece(mv.from, None);
            board.set_piece(mv.to, Some(mv.piece));

            let found = board.piece_at(rook_from);
            if found != Some(rook) {
                tracing::error!(
                    square = %square_name(rook_from),
                    ?found,
                    "castling rook missing from its home square"
                );
                return Err(RulesError::CorruptCastle {
                    square: rook_from,
                    found,
                });
            }
            board.set_piece(rook_from, None);
            board.set_piece(rook_to, Some(rook));
            next.castling.clear_color(color);
            captured = None;
        }
        MoveKind::EnPassant => {
            board.set_piece(mv.from, None);
            board.set_piece(mv.to, Some(mv.piece));
            // The captured pawn sits beside the origin, on the destination's column.
            if let Some(victim_sq) = sq(row_of(mv.from), col_of(mv.to)) {
                captured = board.piece_at(victim_sq);
                board.set_piece(victim_sq, None);
            }
        }
        MoveKind::Promotion(kind) => {
            board.set_piece(mv.from, None);
            board.set_piece(mv.to, Some(Piece::new(color, kind)));
        }
        MoveKind::Normal => {
            board.set_piece(mv.from, None);
            board.set_piece(mv.to, Some(mv.piece));

            // Double pawn push sets en-passant square
            if mv.piece.kind == PieceKind::Pawn {
                let fr = row_of(mv.from);
                let tr = row_of(mv.to);
                if (tr - fr).abs() == 2 {
                    next.en_passant = sq((fr + tr) / 2, col_of(mv.from));
                }
            }
        }
    }

    if mv.piece.kind == PieceKind::King {
        next.castling.clear_color(color);
    }
    // A rook leaving its corner or a capture landing on one
    next.castling.clear_corner(mv.from);
    next.castling.clear_corner(mv.to);

    let irreversible = mv.piece.kind == PieceKind::Pawn || captured.is_some();
    next.halfmove_clock = if irreversible {
        0
    } else {
        state.halfmove_clock + 1
    };

    if record_history {
        if irreversible {
            // Nothing before a pawn move or capture can occur again.
            next.repetitions = Arc::new(HashMap::new());
        } else {
            let history = Arc::make_mut(&mut next.repetitions);
            *history.entry(state.repetition_key()).or_insert(0) += 1;
        }
    }

    if state.turn == Color::Black {
        next.fullmove_number += 1;
    }
    next.turn = state.turn.other();

    Ok(next)
}

/// A move is legal when it leaves the mover's own king unattacked.
pub fn is_legal_move(state: &GameState, mv: &Move) -> RulesResult<bool> {
    let next = advance(state, mv, false)?;
    Ok(!is_in_check(&next, mv.piece.color)?)
}

/// Every legal move of `color`, regardless of whose turn it is.
pub fn get_valid_moves(state: &GameState, color: Color) -> RulesResult<Vec<Move>> {
    let mut out = Vec::with_capacity(48);
    for (from, _) in state.board.pieces_of(color) {
        for mv in generate_piece_moves(state, from) {
            if is_legal_move(state, &mv)? {
                out.push(mv);
            }
        }
    }
    Ok(out)
}

/// Legal moves of the piece on `from`.
pub fn get_valid_moves_from(state: &GameState, from: Square) -> RulesResult<Vec<Move>> {
    let mut out = Vec::new();
    for mv in generate_piece_moves(state, from) {
        if is_legal_move(state, &mv)? {
            out.push(mv);
        }
    }
    Ok(out)
}

/// Same answer as `!get_valid_moves(..).is_empty()` without building the list.
pub fn has_legal_move(state: &GameState, color: Color) -> RulesResult<bool> {
    for (from, _) in state.board.pieces_of(color) {
        for mv in generate_piece_moves(state, from) {
            if is_legal_move(state, &mv)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
