//! Random Move Strategy
//!
//! Selects uniformly at random from the legal moves it is handed. Useful
//! for:
//! - Exercising agents, arenas and plumbing without any search in the way
//! - Baseline comparisons (any real strategy should easily beat this)

use chess_core::{Board, Color, Move, SearchLimits, Strategy};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A strategy that plays random legal moves.
///
/// No evaluation, no memory: every call is an independent uniform draw
/// from the moves on offer.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn select_move(
        &mut self,
        _board: &Board,
        _mover: Color,
        moves: &[Move],
        _limits: &SearchLimits,
    ) -> Move {
        moves
            .choose(&mut thread_rng())
            .copied()
            .unwrap_or_else(Move::stalemate)
    }

    fn name(&self) -> &str {
        "random"
    }
}
