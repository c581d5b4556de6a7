//! Engine registry: engines by identifier, and which one plays each color.
//!
//! The registry is an ordinary value owned by whoever orchestrates the game,
//! so two sessions never share engine state by accident.

use std::future::Future;
use std::time::Duration;

use chess_core::{get_valid_moves, move_to_coord, Color, Engine, GameState, Move};
use classical_engine::{IterativeDeepeningEngine, MinimaxEngine};
use futures_lite::future::yield_now;
use random_engine::{AggressiveEngine, RandomEngine};
use serde::Serialize;

use crate::error::{ArenaError, ArenaResult};

/// Identifier, name and description of a registered engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

struct Entry {
    id: String,
    engine: Box<dyn Engine>,
}

/// Registered engines in registration order, plus the active one per color.
#[derive(Default)]
pub struct EngineRegistry {
    entries: Vec<Entry>,
    /// Index into `entries`, by `Color::idx`.
    active: [Option<usize>; 2],
}

impl EngineRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock engine line-up.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("random", Box::new(RandomEngine::new()));
        registry.register("aggressive", Box::new(AggressiveEngine::new()));
        for depth in [2, 3, 4] {
            registry.register(&format!("minimax-{depth}"), Box::new(MinimaxEngine::new(depth)));
        }
        for depth in [4, 6, 8] {
            registry.register(
                &format!("iterative-{depth}"),
                Box::new(IterativeDeepeningEngine::new(depth)),
            );
        }
        registry
    }

    /// Adds an engine, replacing any engine already registered under `id`.
    pub fn register(&mut self, id: &str, engine: Box<dyn Engine>) {
        match self.position(id) {
            Some(i) => self.entries[i].engine = engine,
            None => self.entries.push(Entry {
                id: id.to_string(),
                engine,
            }),
        }
    }

    pub fn list(&self) -> Vec<EngineInfo> {
        self.entries
            .iter()
            .map(|e| EngineInfo {
                id: e.id.clone(),
                name: e.engine.name().to_string(),
                description: e.engine.description().to_string(),
            })
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn engine(&self, id: &str) -> Option<&dyn Engine> {
        self.position(id).map(|i| self.entries[i].engine.as_ref())
    }

    pub fn engine_mut(&mut self, id: &str) -> Option<&mut dyn Engine> {
        let i = self.position(id)?;
        Some(self.entries[i].engine.as_mut())
    }

    /// Makes `id` the engine playing `color`.
    ///
    /// The previously active engine for that color is deactivated first.
    /// Selecting the engine that is already active re-runs both hooks.
    pub fn set_active(&mut self, color: Color, id: &str) -> ArenaResult<()> {
        let next = self
            .position(id)
            .ok_or_else(|| ArenaError::UnknownEngine(id.to_string()))?;

        if let Some(prev) = self.active[color.idx()] {
            self.entries[prev].engine.on_deactivate();
        }
        self.active[color.idx()] = Some(next);
        self.entries[next].engine.on_activate();

        tracing::info!(%color, engine = id, "engine activated");
        Ok(())
    }

    /// Identifier of the engine playing `color`, if any.
    pub fn active(&self, color: Color) -> Option<&str> {
        self.active[color.idx()].map(|i| self.entries[i].id.as_str())
    }

    /// Asks the engine playing `color` for a move.
    ///
    /// Yields once before searching so a cooperative host can run other work,
    /// then waits out the engine's pacing through `delay`. Returns `None`
    /// when `color` has no legal move. A move outside the legal list is
    /// reported as [`ArenaError::IllegalMove`] and never handed back.
    pub async fn get_move<D, F>(
        &mut self,
        state: &GameState,
        color: Color,
        time_limit: Duration,
        delay: D,
    ) -> ArenaResult<Option<Move>>
    where
        D: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let index = self.active[color.idx()].ok_or(ArenaError::NoActiveEngine(color))?;

        yield_now().await;

        let engine = self.entries[index].engine.as_mut();
        let chosen = engine.get_move(state, color, time_limit)?;
        let pacing = engine.pacing(time_limit);

        let Some(mv) = chosen else {
            return Ok(None);
        };
        if !get_valid_moves(state, color)?.contains(&mv) {
            tracing::warn!(engine = %self.entries[index].id, mv = %move_to_coord(&mv), "engine returned an illegal move");
            return Err(ArenaError::IllegalMove(move_to_coord(&mv)));
        }

        if !pacing.is_zero() {
            delay(pacing).await;
        }
        Ok(Some(mv))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
