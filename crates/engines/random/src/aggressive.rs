use std::time::Duration;

use chess_core::{
    apply_move, get_valid_moves, is_in_check, Color, Engine, GameState, Move, RulesResult,
    SearchLimits, SearchResult,
};
use rand::seq::SliceRandom;
use rand::thread_rng;

const AGGRESSIVE_PACING: Duration = Duration::from_millis(500);

/// Random engine with a taste for violence: any capture beats any check,
/// any check beats a quiet move, and the choice within a bucket is uniform.
#[derive(Debug, Clone, Default)]
pub struct AggressiveEngine {
    nodes: u64,
}

impl AggressiveEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Highest-priority non-empty bucket among captures, checks and all moves.
    fn candidates(
        &mut self,
        state: &GameState,
        color: Color,
        moves: Vec<Move>,
    ) -> RulesResult<Vec<Move>> {
        let captures: Vec<Move> = moves.iter().filter(|m| m.is_capture()).copied().collect();
        if !captures.is_empty() {
            return Ok(captures);
        }

        let mut checks = Vec::new();
        for mv in &moves {
            let next = apply_move(state, mv)?;
            self.nodes += 1;
            if is_in_check(&next, color.other())? {
                checks.push(*mv);
            }
        }
        if !checks.is_empty() {
            return Ok(checks);
        }

        Ok(moves)
    }
}

impl Engine for AggressiveEngine {
    fn search(
        &mut self,
        state: &GameState,
        color: Color,
        _limits: SearchLimits,
    ) -> RulesResult<SearchResult> {
        let moves = get_valid_moves(state, color)?;
        self.nodes = moves.len() as u64;

        let bucket = self.candidates(state, color, moves)?;
        let best_move = bucket.choose(&mut thread_rng()).copied();
        tracing::trace!(candidates = bucket.len(), "aggressive engine bucket");

        Ok(SearchResult {
            best_move,
            depth: 1,
            nodes: self.nodes,
            pv: best_move.into_iter().collect(),
            ..SearchResult::default()
        })
    }

    fn name(&self) -> &str {
        "Aggressive"
    }

    fn description(&self) -> &str {
        "Prefers captures and checks, otherwise random"
    }

    fn pacing(&self, time_limit: Duration) -> Duration {
        AGGRESSIVE_PACING.min(time_limit / 2)
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
