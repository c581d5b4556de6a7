//! A game in progress: the states played so far, the move list, and a cursor
//! for stepping back through earlier positions.

use std::future::Future;
use std::time::Duration;

use chess_core::{
    get_game_result, get_valid_moves, get_valid_moves_from, is_in_check, move_list_entry,
    move_to_coord, parse_square, GameResult, GameState, Move, PieceKind, Square,
};
use tracing::{info, warn};

use crate::error::{ArenaError, ArenaResult};
use crate::registry::EngineRegistry;

/// A played move together with its move-list text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Full-move number of the position the move was played from.
    pub move_number: u32,
    pub notation: String,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    /// `states[i + 1]` is `states[i]` after `moves[i]`. Never empty.
    states: Vec<GameState>,
    moves: Vec<MoveRecord>,
    cursor: usize,
    paused: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session at the standard starting position.
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            states: vec![state],
            moves: Vec::new(),
            cursor: 0,
            paused: false,
        }
    }

    /// Back to the starting position, keeping the paused flag.
    pub fn reset(&mut self) {
        self.states.truncate(1);
        self.moves.clear();
        self.cursor = 0;
    }

    /// The position under the cursor.
    pub fn current(&self) -> &GameState {
        &self.states[self.cursor]
    }

    /// The position the game has actually reached.
    pub fn latest(&self) -> &GameState {
        &self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_viewing_history(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    // Navigation. Each returns whether the cursor moved.

    pub fn go_to_first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn go_to_previous(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn go_to_next(&mut self) -> bool {
        self.go_to(self.cursor + 1)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.go_to(self.states.len() - 1)
    }

    /// Moves the cursor to state `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.states.len() || index == self.cursor {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Result of the position the game has reached.
    pub fn result(&self) -> ArenaResult<GameResult> {
        Ok(get_game_result(self.latest())?)
    }

    /// One-line status for the position under the cursor.
    pub fn status(&self) -> ArenaResult<String> {
        if self.is_viewing_history() {
            return Ok("Viewing history".to_string());
        }
        let result = self.result()?;
        if result.is_over() {
            return Ok(result.describe());
        }
        let state = self.latest();
        Ok(if is_in_check(state, state.turn)? {
            format!("{} is in check", state.turn)
        } else {
            format!("{} to move", state.turn)
        })
    }

    /// Legal moves of the piece on `from`, or nothing when moves are blocked.
    pub fn legal_moves_from(&self, from: Square) -> ArenaResult<Vec<Move>> {
        if self.is_viewing_history() || self.result()?.is_over() {
            return Ok(Vec::new());
        }
        let state = self.latest();
        match state.piece_at(from) {
            Some(piece) if piece.color == state.turn => Ok(get_valid_moves_from(state, from)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Plays `mv` on the latest position.
    ///
    /// The move must be one of the legal moves of the side to move, compared
    /// by origin, destination and promotion choice.
    pub fn play(&mut self, mv: &Move) -> ArenaResult<GameResult> {
        self.ensure_playable()?;
        let state = self.latest();
        let legal = get_valid_moves(state, state.turn)?
            .into_iter()
            .find(|m| m.same_action(mv))
            .ok_or_else(|| {
                warn!(mv = %move_to_coord(mv), "rejected move");
                ArenaError::IllegalMove(move_to_coord(mv))
            })?;

        self.push(legal)
    }

    /// Plays a move given in coordinate form, `e2e4` or `e7e8n`.
    ///
    /// A promotion without a piece letter promotes to a queen.
    pub fn play_coord(&mut self, text: &str) -> ArenaResult<GameResult> {
        let illegal = || ArenaError::IllegalMove(text.to_string());
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(illegal());
        }
        let from = parse_square(&text[0..2]).ok_or_else(illegal)?;
        let to = parse_square(&text[2..4]).ok_or_else(illegal)?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceKind::from_letter(c).ok_or_else(illegal)?),
            None => None,
        };

        self.ensure_playable()?;
        let state = self.latest();
        let mv = get_valid_moves(state, state.turn)?
            .into_iter()
            .find(|m| {
                m.from == from
                    && m.to == to
                    && match m.promotion() {
                        Some(kind) => kind == promotion.unwrap_or(PieceKind::Queen),
                        None => promotion.is_none(),
                    }
            })
            .ok_or_else(illegal)?;
        self.play(&mv)
    }

    /// Lets the engine for the side to move play one move.
    ///
    /// Returns `None` without asking the engine when the session is paused,
    /// the cursor is in the history, or the game is over.
    pub async fn play_ai_turn<D, F>(
        &mut self,
        registry: &mut EngineRegistry,
        time_limit: Duration,
        delay: D,
    ) -> ArenaResult<Option<Move>>
    where
        D: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        if self.paused || self.is_viewing_history() || self.result()?.is_over() {
            return Ok(None);
        }
        let state = self.latest().clone();
        let Some(mv) = registry.get_move(&state, state.turn, time_limit, delay).await? else {
            return Ok(None);
        };
        self.play(&mv)?;
        Ok(Some(mv))
    }

    fn ensure_playable(&self) -> ArenaResult<()> {
        if self.is_viewing_history() {
            return Err(ArenaError::ViewingHistory);
        }
        if self.result()?.is_over() {
            return Err(ArenaError::GameOver);
        }
        Ok(())
    }

    fn push(&mut self, mv: Move) -> ArenaResult<GameResult> {
        let state = self.latest();
        let move_number = state.fullmove_number;
        let next = chess_core::apply_move(state, &mv)?;

        self.moves.push(MoveRecord {
            mv,
            move_number,
            notation: move_list_entry(&mv, move_number),
        });
        self.states.push(next);
        self.cursor = self.states.len() - 1;

        let result = self.result()?;
        if result.is_over() {
            info!(result = %result.describe(), plies = self.moves.len(), "game over");
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
