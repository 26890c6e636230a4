//! Turn clocks and search limits.
//!
//! The host owns the answer to "is my time up?"; strategies only ever ask.
//! A clock is cheaply cloneable and safe to poll from every search node.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Limits for a single move decision.
///
/// Depth caps the iterative deepening loop; the clock cuts the search short
/// wherever it happens to be, after which the best answer from the last
/// completed depth stands.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = unlimited)
    pub move_time: Option<Duration>,
    /// Clock consulted while searching
    pub clock: TurnClock,
}

impl SearchLimits {
    /// Depth-only limits, no clock.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            clock: TurnClock::new(None),
        }
    }

    /// Both a depth cap and a per-move time budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            clock: TurnClock::new(Some(move_time)),
        }
    }

    /// Time budget only, depth effectively unbounded.
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            clock: TurnClock::new(Some(move_time)),
        }
    }

    /// Fast query of the latched stop flag.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.clock.expired()
    }

    /// Start the clock. Call when the move decision begins.
    pub fn start(&self) {
        self.clock.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Shared stop flag plus the wall clock backing it.
///
/// `expired()` is an atomic load and can run at every node; `check_time()`
/// does the actual clock compare and latches the flag. A host can also force
/// a stop with `stop()` regardless of any budget.
#[derive(Debug, Clone)]
pub struct TurnClock {
    stopped: Arc<AtomicBool>,
    start_time: Arc<std::sync::RwLock<Option<Instant>>>,
    /// Time budget for this turn (None = unlimited)
    time_limit: Option<Duration>,
}

impl TurnClock {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::RwLock::new(None)),
            time_limit,
        }
    }

    /// (Re)arm the clock. Clears any previous stop.
    pub fn start(&self) {
        *self.start_time.write().unwrap() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force an immediate stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// True once the clock has stopped, whether by budget or by `stop()`.
    #[inline]
    pub fn expired(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Compare elapsed time against the budget, latching the stop flag when
    /// the budget is gone. Returns the post-check flag.
    pub fn check_time(&self) -> bool {
        if self.expired() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = *self.start_time.read().unwrap()
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Elapsed time since `start()`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining budget (None if unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        let elapsed = self.elapsed();
        if elapsed >= limit {
            Some(Duration::ZERO)
        } else {
            Some(limit - elapsed)
        }
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
