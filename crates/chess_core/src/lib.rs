pub mod attacks;
pub mod board;
pub mod heuristics;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod trace;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use attacks::*;
pub use board::*;
pub use heuristics::*;
pub use movegen::{legal_moves, scored_moves};
pub use perft::perft;
pub use time_control::*;
pub use trace::SearchTrace;
pub use types::*;

// =============================================================================
// Strategy trait, implemented by all move selectors (random, greedy, search)
// =============================================================================

/// Trait that all move selection strategies implement.
///
/// A strategy never generates moves itself; the agent hands it the legal
/// moves with check/checkmate flags and mover-relative scores already
/// annotated, and the strategy picks one.
pub trait Strategy: Send {
    /// Select one of `moves`, which is never empty.
    ///
    /// The returned move is one of `moves`, with its `score` rewritten to
    /// whatever value the strategy resolved for it.
    fn select_move(
        &mut self,
        board: &Board,
        mover: Color,
        moves: &[Move],
        limits: &SearchLimits,
    ) -> Move;

    /// Returns the strategy's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game (recent-move memory, etc.)
    fn new_game(&mut self) {}

    /// Optional: record a decision tree during the next selections.
    fn enable_trace(&mut self, _enabled: bool) {}

    /// Optional: hand over the tree recorded by the last selection.
    fn take_trace(&mut self) -> Option<SearchTrace> {
        None
    }
}

// =============================================================================
// Agent, the host-facing pairing of a strategy with a heuristic
// =============================================================================

/// A playing agent: one strategy plus the heuristic that scores moves for
/// it. This is the whole surface a host needs to drive a game.
pub struct Agent {
    strategy: Box<dyn Strategy>,
    heuristic: Box<dyn Heuristic>,
}

impl Agent {
    pub fn new(strategy: Box<dyn Strategy>, heuristic: Box<dyn Heuristic>) -> Self {
        Agent {
            strategy,
            heuristic,
        }
    }

    /// Decide a move for `mover`. Starts the turn clock, generates and
    /// scores the legal moves and delegates the pick to the strategy. With
    /// no legal move available the returned move carries the `Stalemate`
    /// flag; the caller tells mate from stalemate by checking for check.
    pub fn next_move(&mut self, board: &Board, mover: Color, limits: &SearchLimits) -> Move {
        limits.start();
        let moves = scored_moves(board, mover, self.heuristic.as_ref());
        if moves.is_empty() {
            return Move::stalemate();
        }
        self.strategy.select_move(board, mover, &moves, limits)
    }

    /// True if `claimed` is one of the legal moves in this position.
    /// Identity is (from, to, promo); annotations on `claimed` are ignored.
    pub fn validate_move(&self, board: &Board, mover: Color, claimed: Move) -> bool {
        legal_moves(board, mover).contains(&claimed)
    }

    pub fn new_game(&mut self) {
        self.strategy.new_game();
    }

    pub fn name(&self) -> String {
        format!("{}({})", self.strategy.name(), self.heuristic.name())
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.strategy.enable_trace(enabled);
    }

    pub fn take_trace(&mut self) -> Option<SearchTrace> {
        self.strategy.take_trace()
    }
}
