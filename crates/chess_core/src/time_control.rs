//! Time control and search limits for chess engines.
//!
//! Searches are bounded by wall-clock time rather than cancelled from outside:
//! an engine reads the clock through [`TimeControl`] and returns whatever it
//! has when its share of the budget is spent.

use std::time::{Duration, Instant};

/// Search limits that control when an engine should stop searching.
///
/// Engines should respect both depth and time limits. Depth-configured
/// engines search to the smaller of `depth` and their own setting.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Clock for this search
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only time constraint (infinite depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Restart the clock. Call this when search begins.
    pub fn start(&mut self) {
        self.time_control.restart();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Wall-clock budget of one search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    start_time: Instant,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Create a time controller; the clock starts immediately.
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
        }
    }

    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    /// True once more than `fraction` of the limit has elapsed. Never true without a limit.
    pub fn exceeded_fraction(&self, fraction: f64) -> bool {
        match self.time_limit {
            Some(limit) => self.elapsed() > limit.mul_f64(fraction),
            None => false,
        }
    }

    /// True when less than `fraction` of the limit is left. Never true without a limit.
    pub fn remaining_below_fraction(&self, fraction: f64) -> bool {
        match (self.time_limit, self.remaining()) {
            (Some(limit), Some(left)) => left < limit.mul_f64(fraction),
            _ => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.exceeded_fraction(1.0)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
