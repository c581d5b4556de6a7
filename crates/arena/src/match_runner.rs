//! Match runner for playing games between registered engines

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use chess_core::{get_game_result, move_to_coord, Color, GameResult, GameState};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ArenaError, ArenaResult};
use crate::registry::EngineRegistry;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Time budget per move in milliseconds
    pub move_time_ms: u64,
    /// Plies per game before it is scored as a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every move, not just game results
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            move_time_ms: 1000,
            max_plies: 200,
            alternate_colors: true,
            verbose: false,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> ArenaResult<Self> {
        toml::from_str(text).map_err(|e| ArenaError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> ArenaResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ArenaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }
}

/// Outcome of one game from the first engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Whether the first engine had the white pieces
    pub engine1_white: bool,
    pub outcome: Outcome,
    /// Why the game ended, e.g. "Checkmate! White wins!" or "Ply limit"
    pub reason: String,
    /// Moves in coordinate notation
    pub moves: Vec<String>,
}

/// Tally of a match, from the first engine's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game for the first engine, draws counting half.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    fn record(&mut self, game: GameRecord) {
        match game.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Runs matches between two engines of a registry
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between the engines registered as `engine1` and `engine2`.
    ///
    /// `delay` is handed each engine's pacing request; pass one that returns
    /// immediately to play at full speed. Both ids may name the same engine.
    pub async fn run_match<D, F>(
        &self,
        registry: &mut EngineRegistry,
        engine1: &str,
        engine2: &str,
        delay: D,
    ) -> ArenaResult<MatchResult>
    where
        D: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        for id in [engine1, engine2] {
            if !registry.contains(id) {
                return Err(ArenaError::UnknownEngine(id.to_string()));
            }
        }

        let mut result = MatchResult::new(engine1, engine2);

        for game_num in 0..self.config.games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game = if engine1_white {
                self.play_game(registry, engine1, engine2, &delay).await?
            } else {
                self.play_game(registry, engine2, engine1, &delay).await?
            };
            let outcome = if engine1_white {
                game.outcome
            } else {
                game.outcome.flip()
            };

            info!(
                game = game_num + 1,
                of = self.config.games,
                color = if engine1_white { "W" } else { "B" },
                ?outcome,
                reason = %game.reason,
                score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                "game finished"
            );

            result.record(GameRecord {
                engine1_white,
                outcome,
                ..game
            });
        }

        Ok(result)
    }

    /// Play a single game, outcome from white's perspective
    async fn play_game<D, F>(
        &self,
        registry: &mut EngineRegistry,
        white: &str,
        black: &str,
        delay: &D,
    ) -> ArenaResult<GameRecord>
    where
        D: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        registry.set_active(Color::White, white)?;
        registry.set_active(Color::Black, black)?;
        for id in [white, black] {
            if let Some(engine) = registry.engine_mut(id) {
                engine.new_game();
            }
        }

        let mut state = GameState::new();
        let mut moves = Vec::new();

        while (moves.len() as u32) < self.config.max_plies {
            let result = get_game_result(&state)?;
            if result.is_over() {
                return Ok(finished(result, moves));
            }

            let side = state.turn;
            let Some(mv) = registry
                .get_move(&state, side, self.config.move_time(), |d| delay(d))
                .await?
            else {
                // Only reachable when the side has no legal move, which the
                // result check above already reports.
                break;
            };

            if self.config.verbose {
                info!(ply = moves.len() + 1, %side, mv = %move_to_coord(&mv), "move");
            }
            moves.push(move_to_coord(&mv));
            state = chess_core::apply_move(&state, &mv)?;
        }

        let result = get_game_result(&state)?;
        if result.is_over() {
            return Ok(finished(result, moves));
        }
        Ok(GameRecord {
            engine1_white: true,
            outcome: Outcome::Draw,
            reason: "Ply limit".to_string(),
            moves,
        })
    }
}

fn finished(result: GameResult, moves: Vec<String>) -> GameRecord {
    let outcome = match result.winner() {
        Some(Color::White) => Outcome::Win,
        Some(Color::Black) => Outcome::Loss,
        None => Outcome::Draw,
    };
    GameRecord {
        engine1_white: true,
        outcome,
        reason: result.describe(),
        moves,
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
