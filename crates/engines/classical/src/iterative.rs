//! Iterative deepening alpha-beta with a transposition table, killer moves
//! and principal-variation ordering.

use std::cmp::Reverse;
use std::collections::HashMap;

use chess_core::{
    apply_move, get_valid_moves, line_to_string, Color, Engine, EngineSetting, GameState, Move,
    RepetitionKey, RulesError, RulesResult, SearchLimits, SearchResult, Square, TimeControl,
    FIFTY_MOVE_PLY_LIMIT,
};

use crate::eval::{evaluate, EvalTerms, MATE_THRESHOLD};
use crate::minimax::INF;

/// Past this share of the budget the depth in progress is abandoned.
const TIME_UP_FRACTION: f64 = 0.95;
/// A new depth is not started with less than this share of the budget left.
const MIN_REMAINING_FRACTION: f64 = 0.1;

const MIN_DEPTH: u8 = 3;
const MAX_DEPTH: u8 = 10;

// Ordering bands. Each class outranks everything below it; captures are
// ranked inside their band by MVV-LVA, which stays under 1_000.
const PV_SCORE: i32 = 1_000_000;
const CAPTURE_SCORE: i32 = 100_000;
const KILLER_SCORE: i32 = 50_000;
const PROMOTION_SCORE: i32 = 40_000;
const CASTLE_SCORE: i32 = 30_000;
const CENTER_SCORE: i32 = 20_000;
const CENTER: [Square; 4] = [27, 28, 35, 36];

/// Why a depth's search did not return a score.
#[derive(Debug)]
enum Interrupt {
    /// The time budget ran out; the whole depth is discarded.
    TimeUp,
    Rules(RulesError),
}

impl From<RulesError> for Interrupt {
    fn from(err: RulesError) -> Self {
        Interrupt::Rules(err)
    }
}

/// Transposition key. It carries no game history, so scores that depend on
/// the repetition map or the half-move clock are never stored under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TtKey {
    position: RepetitionKey,
    depth: u8,
    color: Color,
}

/// How a stored score relates to the true value of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    /// The search failed high: the true score is at least this.
    Lower,
    /// No move raised alpha: the true score is at most this.
    Upper,
}

#[derive(Debug, Clone)]
struct TtEntry {
    score: i32,
    depth: u8,
    bound: Bound,
    pv: Vec<Move>,
}

/// Score of a node for the side to move there, with the line behind it.
#[derive(Debug, Clone)]
struct Line {
    score: i32,
    pv: Vec<Move>,
    /// Some node below was scored under a draw rule that reads game history.
    history_dependent: bool,
}

/// Iterative deepening engine.
///
/// Searches depth 1, 2, ... up to its maximum, seeding each iteration's move
/// ordering with the previous principal variation. Tables are cleared at the
/// start of every move.
#[derive(Debug, Clone)]
pub struct IterativeDeepeningEngine {
    max_depth: u8,
    name: String,
    description: String,
    nodes: u64,
    tt: HashMap<TtKey, TtEntry>,
    /// Last quiet move that caused a cutoff, per remaining depth.
    killers: HashMap<u8, Move>,
    pv: Vec<Move>,
}

impl IterativeDeepeningEngine {
    pub fn new(max_depth: u8) -> Self {
        let max_depth = max_depth.clamp(MIN_DEPTH, MAX_DEPTH);
        Self {
            max_depth,
            name: format!("Iterative Deepening ({max_depth})"),
            description: format!("Iterative deepening search up to depth {max_depth}"),
            nodes: 0,
            tt: HashMap::new(),
            killers: HashMap::new(),
            pv: Vec::new(),
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Principal variation of the last completed depth.
    pub fn principal_variation(&self) -> &[Move] {
        &self.pv
    }

    fn reset_tables(&mut self) {
        self.nodes = 0;
        self.tt.clear();
        self.killers.clear();
        self.pv.clear();
    }

    /// Ordering key: the highest class a move belongs to decides its band.
    fn order_score(&self, mv: &Move, depth: u8, ply: usize) -> i32 {
        if self.pv.get(ply).is_some_and(|pv| pv.same_action(mv)) {
            PV_SCORE
        } else if let Some(victim) = mv.captured {
            CAPTURE_SCORE + victim.kind.value() - mv.piece.kind.value() / 10
        } else if self.killers.get(&depth).is_some_and(|k| k.same_action(mv)) {
            KILLER_SCORE
        } else if mv.is_promotion() {
            PROMOTION_SCORE
        } else if mv.is_castle() {
            CASTLE_SCORE
        } else if CENTER.contains(&mv.to) {
            CENTER_SCORE
        } else {
            0
        }
    }

    fn order_moves(&self, moves: &mut [Move], depth: u8, ply: usize) {
        moves.sort_by_cached_key(|mv| Reverse(self.order_score(mv, depth, ply)));
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        state: &GameState,
        color: Color,
        depth: u8,
        ply: usize,
        mut alpha: i32,
        beta: i32,
        tc: &TimeControl,
        root_moves: Option<&[Move]>,
    ) -> Result<Line, Interrupt> {
        if tc.exceeded_fraction(TIME_UP_FRACTION) {
            return Err(Interrupt::TimeUp);
        }

        let key = TtKey {
            position: state.repetition_key(),
            depth,
            color,
        };
        let history_dependent =
            state.repetition_count() > 1 || state.halfmove_clock >= FIFTY_MOVE_PLY_LIMIT;
        if let Some(entry) = self.tt.get(&key).filter(|_| !history_dependent) {
            if entry.depth >= depth {
                let usable = match entry.bound {
                    Bound::Exact => true,
                    Bound::Lower => entry.score >= beta,
                    Bound::Upper => entry.score <= alpha,
                };
                if usable {
                    return Ok(Line {
                        score: entry.score,
                        pv: entry.pv.clone(),
                        history_dependent: false,
                    });
                }
            }
        }

        let mut moves = match root_moves {
            Some(moves) => moves.to_vec(),
            None => get_valid_moves(state, color)?,
        };
        if depth == 0 || moves.is_empty() {
            self.nodes += 1;
            let score = evaluate(state, EvalTerms::LIGHT)? * color.sign();
            return Ok(Line {
                score,
                pv: Vec::new(),
                history_dependent,
            });
        }

        self.order_moves(&mut moves, depth, ply);

        let alpha_orig = alpha;
        let mut best = Line {
            score: -INF,
            pv: Vec::new(),
            history_dependent,
        };
        for mv in moves {
            let next = apply_move(state, &mv)?;
            let child =
                self.alpha_beta(&next, color.other(), depth - 1, ply + 1, -beta, -alpha, tc, None)?;
            let score = -child.score;
            best.history_dependent |= child.history_dependent;

            if score > best.score {
                best.score = score;
                best.pv = std::iter::once(mv).chain(child.pv).collect();
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                if !mv.is_capture() {
                    self.killers.insert(depth, mv);
                }
                break;
            }
        }

        let bound = if best.score <= alpha_orig {
            Bound::Upper
        } else if best.score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        if !best.history_dependent {
            self.tt.insert(
                key,
                TtEntry {
                    score: best.score,
                    depth,
                    bound,
                    pv: best.pv.clone(),
                },
            );
        }

        Ok(best)
    }
}

impl Default for IterativeDeepeningEngine {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Engine for IterativeDeepeningEngine {
    fn search(
        &mut self,
        state: &GameState,
        color: Color,
        mut limits: SearchLimits,
    ) -> RulesResult<SearchResult> {
        self.reset_tables();
        limits.start();

        let moves = get_valid_moves(state, color)?;
        let first = match moves.as_slice() {
            [] => return Ok(SearchResult::no_move()),
            [only] => return Ok(SearchResult::immediate(*only)),
            [first, ..] => *first,
        };

        let tc = &limits.time_control;
        let mut result = SearchResult::immediate(first);

        let max_depth = self.max_depth.min(limits.depth).max(1);
        for depth in 1..=max_depth {
            if tc.remaining_below_fraction(MIN_REMAINING_FRACTION) {
                tracing::debug!(depth = depth - 1, "iterative deepening stopped: time budget low");
                result.stopped = true;
                break;
            }

            match self.alpha_beta(state, color, depth, 0, -INF, INF, tc, Some(&moves)) {
                Ok(line) => {
                    let Some(&best) = line.pv.first() else {
                        continue;
                    };
                    result.best_move = Some(best);
                    result.score = line.score * color.sign();
                    result.depth = depth;
                    result.pv = line.pv.clone();
                    self.pv = line.pv;

                    tracing::debug!(
                        depth,
                        score = result.score,
                        nodes = self.nodes,
                        pv = %line_to_string(&self.pv),
                        "iterative deepening depth complete"
                    );

                    if line.score.abs() > MATE_THRESHOLD {
                        tracing::debug!(depth, "mate found, stopping search");
                        break;
                    }
                }
                Err(Interrupt::TimeUp) => {
                    tracing::debug!(depth, "iterative deepening interrupted: time up");
                    result.stopped = true;
                    break;
                }
                Err(Interrupt::Rules(err)) => return Err(err),
            }
        }

        result.nodes = self.nodes;
        tracing::debug!(
            engine = %self.name,
            %color,
            nodes = self.nodes,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            depth = result.depth,
            "iterative deepening finished"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn new_game(&mut self) {
        self.reset_tables();
    }

    fn on_deactivate(&mut self) {
        self.reset_tables();
    }

    fn settings(&self) -> Vec<EngineSetting> {
        vec![EngineSetting {
            key: "max_depth",
            label: "Maximum Search Depth",
            min: MIN_DEPTH as u32,
            max: MAX_DEPTH as u32,
            value: self.max_depth as u32,
        }]
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if name != "max_depth" {
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
#[path = "iterative_tests.rs"]
mod iterative_tests;
