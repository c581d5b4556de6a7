//! Error types for rule evaluation and state transitions.

use thiserror::Error;

use crate::types::{Color, Piece, Square, square_name};

/// Errors raised by the rules engine.
///
/// None of these describe ordinary game outcomes: checkmate, stalemate and
/// draws are reported through [`crate::GameResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The position has no king of the given color.
    #[error("no {color} king on the board")]
    MissingKing { color: Color },

    /// A castle was executed but the expected rook was not on its square.
    /// Signals a corrupted state rather than bad input.
    #[error("castling rook mismatch on {}: found {found:?}", sq_name(.square))]
    CorruptCastle { square: Square, found: Option<Piece> },

    /// The move does not match the piece standing on its origin square.
    #[error("invalid move from {} to {}", sq_name(.from), sq_name(.to))]
    InvalidMove { from: Square, to: Square },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

fn sq_name(sq: &Square) -> String {
    square_name(*sq)
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
