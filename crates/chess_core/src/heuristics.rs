//! Static position scoring. A heuristic sees the board *after* a move was
//! played and answers "how good is this for `perspective`?" in exact integer
//! arithmetic; higher is always better for the asked side.

use crate::attacks::{attacks_square, defended_by};
use crate::board::Board;
use crate::types::*;

/// Dominates any sum of material and positional terms.
pub const MATE_SCORE: i32 = 100_000;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 1000,
    }
}

pub trait Heuristic: Send + Sync {
    /// Scores `after` for `perspective`; `mv` is the move that produced it.
    fn value(&self, after: &Board, mv: Move, perspective: Color) -> i32;

    fn name(&self) -> &str;
}

/// A checkmate-flagged move ends the game at once, so its value is the mate
/// sentinel signed by whoever delivered it.
fn mate_value(after: &Board, mv: Move, perspective: Color) -> i32 {
    let mover = after.piece_at(mv.to).map_or(perspective, |p| p.color);
    if mover == perspective {
        MATE_SCORE
    } else {
        -MATE_SCORE
    }
}

fn material(board: &Board, perspective: Color) -> i32 {
    let mut total = 0;
    for i in 0..64 {
        if let Some(pc) = board.squares[i] {
            let v = piece_value(pc.kind);
            total += if pc.color == perspective { v } else { -v };
        }
    }
    total
}

/// Bare material count. Mostly a baseline opponent and a debugging aid.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn value(&self, after: &Board, mv: Move, perspective: Color) -> i32 {
        if mv.flag == MoveFlag::Checkmate {
            return mate_value(after, mv, perspective);
        }
        material(after, perspective)
    }

    fn name(&self) -> &str {
        "material"
    }
}

/// Material plus piece-square tables plus a tactical term for the landing
/// square of the move under consideration.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalHeuristic;

impl Heuristic for PositionalHeuristic {
    fn value(&self, after: &Board, mv: Move, perspective: Color) -> i32 {
        if mv.flag == MoveFlag::Checkmate {
            return mate_value(after, mv, perspective);
        }

        let mut total = 0;
        for i in 0..64 {
            if let Some(pc) = after.squares[i] {
                let v = piece_value(pc.kind) + pst(pc.kind, pc.color, i as u8);
                total += if pc.color == perspective { v } else { -v };
            }
        }

        // Landing on a square a friendly piece covers is worth part of the
        // piece's value; if the square is contested the stake doubles.
        if let Some(pc) = after.piece_at(mv.to)
            && pc.kind != PieceKind::King
            && defended_by(after, perspective, mv.to)
        {
            let mut bonus = piece_value(pc.kind) * 2 / 3;
            if attacks_square(after, perspective, mv.to) {
                bonus *= 2;
            }
            total += bonus;
        }

        total
    }

    fn name(&self) -> &str {
        "positional"
    }
}

/// Table lookup for a piece of `color` standing on `s`. Tables are written
/// from White's point of view with rank 8 as the first row; a Black piece
/// reads the vertically mirrored square, so both sides share one table per
/// piece kind.
pub fn pst(kind: PieceKind, color: Color, s: u8) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    let f = file_of(s) as usize;
    let r = rank_of(s) as usize;
    match color {
        Color::White => table[(7 - r) * 8 + f],
        Color::Black => table[r * 8 + f],
    }
}

// Piece Square Tables
// Orientation: first row is rank 8, last row is rank 1, files a..h left to
// right, i.e. the board as printed in a diagram for White.

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
    100, 100, 100, 100, 100, 100, 100, 100,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[cfg(test)]
#[path = "heuristics_tests.rs"]
mod heuristics_tests;
