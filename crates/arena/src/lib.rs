//! Arena for ML-chess engines
//!
//! This crate sits between the rules engine and whoever presents a game:
//! - [`EngineRegistry`]: engines by id, and which one plays each color
//! - [`GameSession`]: the states of a game, its move list and history navigation
//! - [`MatchRunner`]: engine-vs-engine matches with a win/loss/draw tally
//!
//! Engine turns are `async` so a host can keep its own loop responsive; the
//! host supplies the timer used for engine pacing.
//!
//! # Usage
//!
//! ```bash
//! # List the registered engines
//! cargo run -p arena -- engines
//!
//! # Play ten games between two engines, 200 ms per move
//! cargo run -p arena -- match minimax-3 iterative-6 --games 10 --time 200
//! ```

mod error;
mod match_runner;
mod registry;
mod session;

pub use error::*;
pub use match_runner::*;
pub use registry::*;
pub use session::*;
