//! Minimax Chess Strategy
//!
//! Depth-bounded adversarial search on a fixed White-positive axis: nodes
//! where White is to move maximize, Black nodes minimize, and every leaf is
//! the configured heuristic read from White's side. Iterative deepening
//! keeps the search clock-safe: an interrupted depth is thrown away and the
//! last completed depth answers.

use chess_core::{
    in_check, legal_moves, Board, Color, Heuristic, Move, MoveFlag, PositionalHeuristic,
    SearchLimits, SearchTrace, Strategy, MATE_SCORE,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

/// Plain minimax over the legal move tree.
///
/// Search behavior:
/// - Leaves score `heuristic.value(board, incoming, Color::White)`
/// - A child already flagged checkmate is terminal and never expanded
/// - A node with zero replies scores a signed mate for the stuck side, or
///   exactly 0 when it is not in check (stalemate is a dead draw no matter
///   the material)
/// - The clock is polled at every node; once it expires the node answers
///   with its leaf value and the surrounding depth iteration is discarded
pub struct MinimaxStrategy {
    heuristic: Box<dyn Heuristic>,
    trace_enabled: bool,
    trace: Option<SearchTrace>,
}

impl MinimaxStrategy {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            trace_enabled: false,
            trace: None,
        }
    }

    /// One root iteration at a fixed depth. Returns every root move tied on
    /// the best score, each with its resolved value written back.
    fn search_root(
        &mut self,
        board: &Board,
        mover: Color,
        moves: &[Move],
        depth: u8,
        limits: &SearchLimits,
    ) -> Vec<Move> {
        let maximizing = mover == Color::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best: Vec<Move> = Vec::new();

        for mut mv in moves.iter().copied() {
            if limits.clock.check_time() {
                break;
            }
            let after = board.apply(mv);
            self.trace_enter(mv);
            mv.score = self.search(&after, mv, mover.other(), depth, limits);
            self.trace_exit(mv.score);

            if best.is_empty()
                || (maximizing && mv.score > best_score)
                || (!maximizing && mv.score < best_score)
            {
                best_score = mv.score;
                best.clear();
                best.push(mv);
            } else if mv.score == best_score {
                best.push(mv);
            }
        }
        best
    }

    /// Scores the position reached by `incoming`, with `mover` to reply.
    fn search(
        &mut self,
        board: &Board,
        incoming: Move,
        mover: Color,
        depth: u8,
        limits: &SearchLimits,
    ) -> i32 {
        // Depth exhausted, a line that already ended in mate, or time up:
        // all answer with the heuristic read of this node.
        if depth < 1 || incoming.flag == MoveFlag::Checkmate || limits.clock.check_time() {
            return self.heuristic.value(board, incoming, Color::White);
        }

        let replies = legal_moves(board, mover);
        if replies.is_empty() {
            return if in_check(board, mover) {
                mated_score(mover)
            } else {
                0
            };
        }

        let maximizing = mover == Color::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_mv = replies[0];

        for mut mv in replies {
            let after = board.apply(mv);
            self.trace_enter(mv);
            mv.score = self.search(&after, mv, mover.other(), depth - 1, limits);
            self.trace_exit(mv.score);

            if (maximizing && mv.score > best_score) || (!maximizing && mv.score < best_score) {
                best_score = mv.score;
                best_mv = mv;
            }
        }
        self.trace_mark_best(best_mv);
        best_score
    }

    fn trace_enter(&mut self, mv: Move) {
        if let Some(t) = self.trace.as_mut() {
            t.enter(mv);
        }
    }

    fn trace_exit(&mut self, score: i32) {
        if let Some(t) = self.trace.as_mut() {
            t.exit(score);
        }
    }

    fn trace_mark_best(&mut self, mv: Move) {
        if let Some(t) = self.trace.as_mut() {
            t.mark_best(mv);
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(Box::new(PositionalHeuristic))
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(
        &mut self,
        board: &Board,
        mover: Color,
        moves: &[Move],
        limits: &SearchLimits,
    ) -> Move {
        if self.trace_enabled {
            self.trace = Some(SearchTrace::new());
        }

        // Depth 0 ranks by the generator's own annotations and never
        // consults the clock, so a completed depth always exists.
        let mut best = annotation_ties(moves);

        for depth in 1..=limits.depth {
            let result = self.search_root(board, mover, moves, depth, limits);
            if limits.clock.expired() {
                debug!(depth, "clock expired, keeping previous depth");
                break;
            }
            if let Some(top) = result.first() {
                debug!(depth, score = top.score, ties = result.len(), "depth completed");
                best = result;
            }
        }

        let pick = best
            .choose(&mut thread_rng())
            .copied()
            .unwrap_or_else(Move::stalemate);
        self.trace_mark_best(pick);
        pick
    }

    fn name(&self) -> &str {
        "minimax"
    }

    fn enable_trace(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
        if !enabled {
            self.trace = None;
        }
    }

    fn take_trace(&mut self) -> Option<SearchTrace> {
        self.trace.take()
    }
}

/// Score of a side that is to move but has no moves and stands in check.
fn mated_score(mover: Color) -> i32 {
    match mover {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// Root moves tied on the best generator annotation. Annotations are
/// mover-relative, so the maximum is best for either color.
fn annotation_ties(moves: &[Move]) -> Vec<Move> {
    let mut best = i32::MIN;
    for mv in moves {
        if mv.score > best {
            best = mv.score;
        }
    }
    moves.iter().filter(|mv| mv.score == best).copied().collect()
}
