//! Pure perft node counting for generator validation.
//!
//! Runs on the unclassified generation path so the counts measure the rule
//! set and nothing else. With castling, en passant and promotion outside
//! the rules, counts from the start position still match the classical
//! tables through depth 4; they diverge from depth 5 where en passant
//! first appears.

use crate::board::Board;
use crate::movegen::legal_moves_unclassified;
use crate::types::Color;

/// Counts all legal move paths of length `depth` from this position.
pub fn perft(board: &Board, mover: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves_unclassified(board, mover);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        nodes += perft(&board.apply(mv), mover.other(), depth - 1);
    }
    nodes
}
