pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod result;
pub mod state;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::*;
pub use fen::START_FEN;
pub use movegen::*;
pub use notation::*;
pub use perft::{divide, perft};
pub use result::*;
pub use state::*;
pub use time_control::*;
pub use types::*;

use std::time::Duration;

// =============================================================================
// Engine trait: implemented by every move-choosing strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from white's perspective
    pub score: i32,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Number of positions evaluated
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
    /// Principal variation starting with `best_move`, when the engine tracks one
    pub pv: Vec<Move>,
}

impl SearchResult {
    /// Result for a position without legal moves.
    pub fn no_move() -> Self {
        Self::default()
    }

    /// Result for a move chosen without searching.
    pub fn immediate(mv: Move) -> Self {
        Self {
            best_move: Some(mv),
            pv: vec![mv],
            ..Self::default()
        }
    }
}

/// A tunable engine parameter, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSetting {
    pub key: &'static str,
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub value: u32,
}

/// Trait that all chess engines must implement.
///
/// Engines receive the state and the color they play for and must only ever
/// answer with a move taken from [`get_valid_moves`].
pub trait Engine: Send {
    /// Search the position on behalf of `color` within `limits`.
    fn search(
        &mut self,
        state: &GameState,
        color: Color,
        limits: SearchLimits,
    ) -> RulesResult<SearchResult>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// One-line description for engine pickers
    fn description(&self) -> &str {
        ""
    }

    /// Legal move for `color`, or `None` when it has none.
    fn get_move(
        &mut self,
        state: &GameState,
        color: Color,
        time_limit: Duration,
    ) -> RulesResult<Option<Move>> {
        Ok(self
            .search(state, color, SearchLimits::time(time_limit))?
            .best_move)
    }

    /// Delay the host should wait before playing the move, so quick engines
    /// do not reply instantly to a human.
    fn pacing(&self, _time_limit: Duration) -> Duration {
        Duration::ZERO
    }

    /// Reset internal state for a new game (clear hash tables, history, etc.)
    fn new_game(&mut self) {}

    /// Called when the engine becomes the active player for a color.
    fn on_activate(&mut self) {}

    /// Called when the engine stops being the active player for a color.
    fn on_deactivate(&mut self) {}

    fn settings(&self) -> Vec<EngineSetting> {
        Vec::new()
    }

    /// Optional: Set an option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
