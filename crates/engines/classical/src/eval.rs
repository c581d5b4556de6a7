//! Hand-tuned position evaluation.
//!
//! Scores are in centipawns from white's point of view: positive favors white,
//! negative favors black. Search code converts to the side-to-move view.

use chess_core::{
    get_game_result, get_valid_moves, is_in_check, is_square_attacked, is_square_defended, sq,
    Color, GameResult, GameState, Piece, PieceKind, RulesResult, Square,
};

/// Score of a position where white has been mated (negated) or has mated.
pub const MATE_SCORE: i32 = 10_000;

/// Any score beyond this magnitude is a forced mate.
pub const MATE_THRESHOLD: i32 = 9_000;

/// d4, e4, d5, e5
const CENTER: [Square; 4] = [27, 28, 35, 36];

/// The ring c6-f6, c5, f5, c4, f4, c3-f3 around the center.
const EXTENDED_CENTER: [Square; 12] = [18, 19, 20, 21, 26, 29, 34, 37, 42, 43, 44, 45];

const CENTER_BONUS: i32 = 30;
const EXTENDED_CENTER_BONUS: i32 = 10;
const CHECK_PENALTY: i32 = 200;
const MOBILITY_WEIGHT: i32 = 2;
const PAWN_ADVANCE_BONUS: i32 = 5;
const DOUBLED_PAWN_PENALTY: i32 = 25;
const UNDEVELOPED_PENALTY: i32 = 20;

/// Knight and bishop home squares, per color.
const MINOR_HOMES: [(Color, PieceKind, [Square; 2]); 4] = [
    (Color::White, PieceKind::Knight, [57, 62]),
    (Color::White, PieceKind::Bishop, [58, 61]),
    (Color::Black, PieceKind::Knight, [1, 6]),
    (Color::Black, PieceKind::Bishop, [2, 5]),
];

/// Which optional terms an evaluation includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalTerms {
    /// Legal-move count difference. Costs two full move generations per call.
    pub mobility: bool,
    /// Pawn advancement, doubled pawns and minor-piece development.
    pub structure: bool,
}

impl EvalTerms {
    /// Material, piece safety, center control and check only.
    pub const LIGHT: EvalTerms = EvalTerms {
        mobility: false,
        structure: false,
    };

    /// Every term except mobility unless the search is shallow enough to pay for it.
    pub fn for_depth(depth: u8) -> Self {
        EvalTerms {
            mobility: depth <= 2,
            structure: true,
        }
    }
}

/// Evaluates `state` from white's perspective.
///
/// Finished games short-circuit: a mate is worth [`MATE_SCORE`] to the
/// winner and every draw scores exactly zero.
pub fn evaluate(state: &GameState, terms: EvalTerms) -> RulesResult<i32> {
    match get_game_result(state)? {
        GameResult::Checkmate { winner } => return Ok(MATE_SCORE * winner.sign()),
        GameResult::Stalemate | GameResult::FiftyMoveRule | GameResult::ThreefoldRepetition => {
            return Ok(0)
        }
        GameResult::Ongoing => {}
    }

    let mut score = material(state) + center_control(state);

    if is_in_check(state, Color::White)? {
        score -= CHECK_PENALTY;
    }
    if is_in_check(state, Color::Black)? {
        score += CHECK_PENALTY;
    }

    if terms.mobility {
        let white = get_valid_moves(state, Color::White)?.len() as i32;
        let black = get_valid_moves(state, Color::Black)?.len() as i32;
        score += (white - black) * MOBILITY_WEIGHT;
    }

    if terms.structure {
        score += pawn_structure(state) + development(state);
    }

    Ok(score)
}

/// Value of one piece after the safety adjustment, before its color sign.
///
/// Attacked pieces lose half their value (pawns a further fifth); pieces
/// protected by a friendly piece gain a tenth.
pub fn adjusted_value(state: &GameState, square: Square, piece: Piece) -> i32 {
    let board = &state.board;
    let mut value = piece.kind.value();
    if is_square_attacked(board, square, piece.color.other()) {
        value = value * 50 / 100;
        if piece.kind == PieceKind::Pawn {
            value = value * 80 / 100;
        }
    }
    if is_square_defended(board, square, piece.color) {
        value = value * 110 / 100;
    }
    value
}

fn material(state: &GameState) -> i32 {
    state
        .board
        .pieces()
        .map(|(square, piece)| adjusted_value(state, square, piece) * piece.color.sign())
        .sum()
}

fn center_control(state: &GameState) -> i32 {
    let occupant_sign = |s: &Square| state.board.color_at(*s).map_or(0, Color::sign);
    let center: i32 = CENTER.iter().map(occupant_sign).sum();
    let ring: i32 = EXTENDED_CENTER.iter().map(occupant_sign).sum();
    center * CENTER_BONUS + ring * EXTENDED_CENTER_BONUS
}

fn pawn_structure(state: &GameState) -> i32 {
    let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    let mut score = 0;

    for col in 0..8i8 {
        let mut white = 0;
        let mut black = 0;
        for row in 0..8i8 {
            let piece = sq(row, col).and_then(|s| state.board.piece_at(s));
            if piece == Some(white_pawn) {
                white += 1;
                score += (6 - row as i32) * PAWN_ADVANCE_BONUS;
            } else if piece == Some(black_pawn) {
                black += 1;
                score -= (row as i32 - 1) * PAWN_ADVANCE_BONUS;
            }
        }
        if white > 1 {
            score -= (white - 1) * DOUBLED_PAWN_PENALTY;
        }
        if black > 1 {
            score += (black - 1) * DOUBLED_PAWN_PENALTY;
        }
    }
    score
}

fn development(state: &GameState) -> i32 {
    let mut score = 0;
    for (color, kind, homes) in MINOR_HOMES {
        let piece = Piece::new(color, kind);
        let idle = homes
            .iter()
            .filter(|&&s| state.board.piece_at(s) == Some(piece))
            .count() as i32;
        score -= idle * UNDEVELOPED_PENALTY * color.sign();
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
