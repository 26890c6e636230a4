//! Threat detection. Everything here answers one question: could a piece of
//! the given color be captured if it stood on a given square? The scan runs
//! outward from the victim square, so only the first occupant of each ray
//! and the eight knight squares are ever inspected.

use crate::board::Board;
use crate::types::*;

/// True if any piece of `victim.other()` could capture on `target`.
pub fn attacks_square(board: &Board, victim: Color, target: u8) -> bool {
    let enemy = victim.other();
    let tf = file_of(target);
    let tr = rank_of(target);

    let rays = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (df, dr) in rays {
        let diagonal = df != 0 && dr != 0;
        let mut dist: i8 = 1;
        while let Some(s) = sq(tf + df * dist, tr + dr * dist) {
            if let Some(pc) = board.piece_at(s) {
                // First occupant settles the ray either way.
                if pc.color == enemy {
                    let threat = match pc.kind {
                        PieceKind::Queen => true,
                        PieceKind::Rook => !diagonal,
                        PieceKind::Bishop => diagonal,
                        PieceKind::King => dist == 1,
                        // Pawns capture toward the victim, so they sit on
                        // the victim's forward diagonals.
                        PieceKind::Pawn => diagonal && dist == 1 && dr == victim.forward(),
                        PieceKind::Knight => false,
                    };
                    if threat {
                        return true;
                    }
                }
                break;
            }
            dist += 1;
        }
    }

    // Knight probes: jump squares only, empty ones carry no information.
    let knight = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in knight {
        if let Some(s) = sq(tf + df, tr + dr)
            && let Some(pc) = board.piece_at(s)
            && pc.color == enemy
            && pc.kind == PieceKind::Knight
        {
            return true;
        }
    }

    false
}

/// A board without a king is treated as not in check, so exploratory
/// positions built by tests or hosts never panic mid-scan.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_sq(color) {
        Some(ksq) => attacks_square(board, color, ksq),
        None => false,
    }
}

/// True if `c` has a piece that could recapture on `target`.
pub fn defended_by(board: &Board, c: Color, target: u8) -> bool {
    attacks_square(board, c.other(), target)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
