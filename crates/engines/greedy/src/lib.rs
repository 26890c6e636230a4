//! Greedy Chess Strategy
//!
//! Takes the highest-scored move straight off the generator annotations.
//! A rolling window of recent picks breaks ties away from moves just
//! played, so mirrored evaluations do not shuttle a piece back and forth.

use std::collections::VecDeque;

use chess_core::{Board, Color, Move, SearchLimits, Strategy};

/// Number of recent picks remembered for tie-breaking.
const RECENT_WINDOW: usize = 8;

/// One-ply strategy: argmax over the mover-relative scores the generator
/// already attached.
///
/// Among tied maxima, the first move not in the recent window wins; when
/// every tie is recent, the last tie is played.
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy {
    recent: VecDeque<Move>,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for GreedyStrategy {
    fn select_move(
        &mut self,
        _board: &Board,
        _mover: Color,
        moves: &[Move],
        _limits: &SearchLimits,
    ) -> Move {
        let Some(&first) = moves.first() else {
            return Move::stalemate();
        };

        let mut best_score = first.score;
        for mv in &moves[1..] {
            if mv.score > best_score {
                best_score = mv.score;
            }
        }

        // Recency compares move identity, so a tie replayed with a fresh
        // score still counts as recent.
        let mut pick = first;
        for &mv in moves.iter().filter(|mv| mv.score == best_score) {
            pick = mv;
            if !self.recent.contains(&mv) {
                break;
            }
        }

        self.recent.push_back(pick);
        if self.recent.len() > RECENT_WINDOW {
            self.recent.pop_front();
        }
        pick
    }

    fn name(&self) -> &str {
        "greedy"
    }

    fn new_game(&mut self) {
        self.recent.clear();
    }
}
