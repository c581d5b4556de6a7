//! Classical Chess Engines
//!
//! Alpha-beta search over the rules in `chess_core` with a hand-tuned
//! evaluation. Two flavours share the evaluator:
//! - [`MinimaxEngine`]: fixed depth, captures searched first
//! - [`IterativeDeepeningEngine`]: deepens until time or depth runs out, with
//!   a transposition table, killer moves and principal-variation ordering

mod eval;
mod iterative;
mod minimax;

pub use eval::{adjusted_value, evaluate, EvalTerms, MATE_SCORE, MATE_THRESHOLD};
pub use iterative::IterativeDeepeningEngine;
pub use minimax::MinimaxEngine;
