//! Game termination: checkmate, stalemate and the draw rules.

use crate::error::RulesResult;
use crate::state::{GameState, has_legal_move, is_in_check};
use crate::types::Color;

/// Half-move clock value (plies without a pawn move or capture) at which the
/// game is drawn.
pub const FIFTY_MOVE_PLY_LIMIT: u32 = 50;

/// Occurrences of one position that draw the game.
pub const REPETITION_LIMIT: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameResult::Stalemate | GameResult::FiftyMoveRule | GameResult::ThreefoldRepetition
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Short human-readable description.
    pub fn describe(self) -> String {
        match self {
            GameResult::Ongoing => "In progress".to_string(),
            GameResult::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            GameResult::Stalemate => "Stalemate!".to_string(),
            GameResult::FiftyMoveRule => "Draw by fifty-move rule".to_string(),
            GameResult::ThreefoldRepetition => "Draw by threefold repetition".to_string(),
        }
    }
}

/// Classifies `state` from the point of view of the side to move.
///
/// Having no legal move is checked first, so a mate delivered on the ply that
/// also exhausts the half-move clock is still a mate.
pub fn get_game_result(state: &GameState) -> RulesResult<GameResult> {
    let side = state.turn;
    if !has_legal_move(state, side)? {
        return Ok(if is_in_check(state, side)? {
            GameResult::Checkmate {
                winner: side.other(),
            }
        } else {
            GameResult::Stalemate
        });
    }
    if state.halfmove_clock >= FIFTY_MOVE_PLY_LIMIT {
        return Ok(GameResult::FiftyMoveRule);
    }
    if state.repetition_count() >= REPETITION_LIMIT {
        return Ok(GameResult::ThreefoldRepetition);
    }
    Ok(GameResult::Ongoing)
}
