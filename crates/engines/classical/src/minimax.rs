//! Fixed-depth negamax with alpha-beta pruning.

use chess_core::{
    apply_move, get_valid_moves, move_label, Color, Engine, EngineSetting, GameState, Move,
    RulesResult, SearchLimits, SearchResult, TimeControl,
};

use crate::eval::{evaluate, EvalTerms};

/// Past this share of the budget every node is treated as a leaf.
const LEAF_FRACTION: f64 = 0.9;

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 10;

pub(crate) const INF: i32 = i32::MAX / 2;

/// Fixed-depth alpha-beta engine.
///
/// Captures are searched first at every node, which is all the ordering it
/// does. The search is anytime: once most of the time budget is gone the
/// remaining nodes are scored statically instead of expanded, so a move is
/// always produced.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    name: String,
    description: String,
    nodes: u64,
    /// Set when the time budget turned interior nodes into leaves.
    cut_off: bool,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        let depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);
        Self {
            depth,
            name: format!("Minimax ({depth})"),
            description: format!("Basic minimax search with depth {depth}"),
            nodes: 0,
            cut_off: false,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Negamax score of `state` for `color`, with the move that achieves it.
    fn negamax(
        &mut self,
        state: &GameState,
        color: Color,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        tc: &TimeControl,
    ) -> RulesResult<(i32, Option<Move>)> {
        let terms = EvalTerms::for_depth(self.depth);

        if tc.exceeded_fraction(LEAF_FRACTION) {
            self.cut_off = true;
            return Ok((evaluate(state, terms)? * color.sign(), None));
        }

        let mut moves = get_valid_moves(state, color)?;
        if depth == 0 || moves.is_empty() {
            self.nodes += 1;
            return Ok((evaluate(state, terms)? * color.sign(), None));
        }

        // Stable: captures first, generation order otherwise
        moves.sort_by_key(|m| !m.is_capture());

        let mut best_move = moves[0];
        let mut best = -INF;
        for mv in &moves {
            let next = apply_move(state, mv)?;
            let (child, _) = self.negamax(&next, color.other(), depth - 1, -beta, -alpha, tc)?;
            let score = -child;

            if score > best {
                best = score;
                best_move = *mv;
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }

        Ok((best, Some(best_move)))
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Engine for MinimaxEngine {
    fn search(
        &mut self,
        state: &GameState,
        color: Color,
        mut limits: SearchLimits,
    ) -> RulesResult<SearchResult> {
        self.nodes = 0;
        self.cut_off = false;
        limits.start();

        let moves = get_valid_moves(state, color)?;
        match moves.as_slice() {
            [] => return Ok(SearchResult::no_move()),
            [only] => return Ok(SearchResult::immediate(*only)),
            _ => {}
        }

        let depth = self.depth.min(limits.depth).max(1);
        let tc = &limits.time_control;
        let (score, best) = self.negamax(state, color, depth, -INF, INF, tc)?;
        // A search cut off at the root still has to answer
        let best_move = best.unwrap_or(moves[0]);

        tracing::debug!(
            engine = %self.name,
            %color,
            nodes = self.nodes,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            score = score * color.sign(),
            best = %move_label(&best_move),
            "minimax search finished"
        );

        Ok(SearchResult {
            best_move: Some(best_move),
            score: score * color.sign(),
            depth,
            nodes: self.nodes,
            stopped: self.cut_off,
            pv: vec![best_move],
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn settings(&self) -> Vec<EngineSetting> {
        vec![EngineSetting {
            key: "depth",
            label: "Search Depth",
            min: MIN_DEPTH as u32,
            max: MAX_DEPTH as u32,
            value: self.depth as u32,
        }]
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if name != "depth" {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(depth) if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) => {
                *self = Self::new(depth);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
