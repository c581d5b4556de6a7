//! Errors surfaced to whoever drives a game or a match.

use chess_core::{Color, RulesError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("engine '{0}' not found")]
    UnknownEngine(String),

    #[error("no engine active for {0}")]
    NoActiveEngine(Color),

    /// A move that is not among the legal moves of the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("cannot move while viewing history")]
    ViewingHistory,

    #[error("the game is over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type ArenaResult<T> = Result<T, ArenaError>;
