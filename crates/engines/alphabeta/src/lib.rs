//! Alpha-Beta Chess Strategy
//!
//! The minimax recursion with a fail-hard `(alpha, beta)` window threaded
//! through it: White nodes raise alpha, Black nodes lower beta, and the
//! remaining siblings of a node are skipped once `alpha >= beta`. Every
//! root child is searched with the full window, so per-root-move scores
//! match the plain minimax engine exactly while inner nodes prune.

use chess_core::{
    in_check, legal_moves, Board, Color, Heuristic, Move, MoveFlag, PositionalHeuristic,
    SearchLimits, SearchTrace, Strategy, MATE_SCORE,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

/// Minimax with alpha-beta pruning on the White-positive axis.
///
/// Terminal handling matches the plain engine: checkmate-flagged children
/// are never expanded, a reply-less node scores a signed mate or an exact
/// stalemate 0, and an expired clock turns any node into a leaf while the
/// interrupted depth iteration is discarded.
pub struct AlphaBetaStrategy {
    heuristic: Box<dyn Heuristic>,
    trace_enabled: bool,
    trace: Option<SearchTrace>,
}

impl AlphaBetaStrategy {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            heuristic,
            trace_enabled: false,
            trace: None,
        }
    }

    /// One root iteration at a fixed depth. Each root child gets the full
    /// window; pruning only ever trims inner nodes.
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
            mv.score = self.search(
                &after,
                mv,
                mover.other(),
                i32::MIN,
                i32::MAX,
                depth,
                limits,
            );
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

    /// Scores the position reached by `incoming` inside `(alpha, beta)`,
    /// with `mover` to reply. Fail-hard: the answer is the tightened bound.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &mut self,
        board: &Board,
        incoming: Move,
        mover: Color,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
        limits: &SearchLimits,
    ) -> i32 {
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
        let mut best_mv = replies[0];

        for mut mv in replies {
            let after = board.apply(mv);
            self.trace_enter(mv);
            mv.score = self.search(&after, mv, mover.other(), alpha, beta, depth - 1, limits);
            self.trace_exit(mv.score);

            if maximizing {
                if mv.score > alpha {
                    alpha = mv.score;
                    best_mv = mv;
                }
            } else if mv.score < beta {
                beta = mv.score;
                best_mv = mv;
            }
            if alpha >= beta {
                break;
            }
        }
        self.trace_mark_best(best_mv);
        if maximizing { alpha } else { beta }
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

impl Default for AlphaBetaStrategy {
    fn default() -> Self {
        Self::new(Box::new(PositionalHeuristic))
    }
}

impl Strategy for AlphaBetaStrategy {
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
        "alphabeta"
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

#[cfg(test)]
mod lib_tests;
