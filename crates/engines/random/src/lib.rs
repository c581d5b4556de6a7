//! Random Move Chess Engines
//!
//! Two engines that do no searching at all:
//! - [`RandomEngine`] picks uniformly among the legal moves
//! - [`AggressiveEngine`] does the same, but only among captures when any
//!   exist, then among checking moves
//!
//! Useful as baselines (any real engine should easily beat these) and for
//! stress testing move generation.

mod aggressive;

pub use aggressive::AggressiveEngine;

use std::time::Duration;

use chess_core::{get_valid_moves, Color, Engine, GameState, RulesResult, SearchLimits, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// Longest pause the random engine takes before answering.
const RANDOM_PACING: Duration = Duration::from_millis(300);

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        state: &GameState,
        color: Color,
        _limits: SearchLimits,
    ) -> RulesResult<SearchResult> {
        let moves = get_valid_moves(state, color)?;
        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut thread_rng()).copied();

        Ok(SearchResult {
            best_move,
            depth: 1,
            nodes: self.nodes,
            pv: best_move.into_iter().collect(),
            ..SearchResult::default()
        })
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn description(&self) -> &str {
        "Selects moves completely at random"
    }

    fn pacing(&self, time_limit: Duration) -> Duration {
        RANDOM_PACING.min(time_limit / 2)
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
