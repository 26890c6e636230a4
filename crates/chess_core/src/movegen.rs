use crate::attacks::in_check;
use crate::board::Board;
use crate::heuristics::Heuristic;
use crate::types::*;

/// Generate all legal moves for `mover`, each flagged `Check` or `Checkmate`
/// where it applies. The list is unordered and scores are left at zero.
pub fn legal_moves(board: &Board, mover: Color) -> Vec<Move> {
    generate(board, mover, false)
}

/// `legal_moves` plus a heuristic score per move, evaluated on the board the
/// move produces from the mover's perspective. Scoring happens after
/// classification so a mate flag reaches the heuristic.
pub fn scored_moves(board: &Board, mover: Color, h: &dyn Heuristic) -> Vec<Move> {
    let mut moves = generate(board, mover, false);
    for mv in &mut moves {
        mv.score = h.value(&board.apply(*mv), *mv, mover);
    }
    moves
}

/// Legality filtering only, no flags. This is what classification probes run
/// (recursing further would never terminate) and what perft counts.
pub(crate) fn legal_moves_unclassified(board: &Board, mover: Color) -> Vec<Move> {
    generate(board, mover, true)
}

fn generate(board: &Board, mover: Color, classifying: bool) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        let pc = match board.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != mover {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, mover, &mut out),
            PieceKind::Knight => gen_knight(board, from, mover, &mut out),
            PieceKind::Bishop => gen_slider(
                board,
                from,
                mover,
                &mut out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => gen_slider(
                board,
                from,
                mover,
                &mut out,
                &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            ),
            PieceKind::Queen => gen_slider(
                board,
                from,
                mover,
                &mut out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => gen_king(board, from, mover, &mut out),
        }
    }

    // A move may not leave the mover's own king capturable.
    out.retain(|&mv| !in_check(&board.apply(mv), mover));

    if !classifying {
        classify(board, mover, &mut out);
    }
    out
}

/// Flags every move that checks the opponent, upgrading to `Checkmate` when
/// the opponent has no legal reply. The reply probe runs with `classifying`
/// set so it neither flags nor recurses again.
fn classify(board: &Board, mover: Color, moves: &mut [Move]) {
    let opp = mover.other();
    for mv in moves {
        let after = board.apply(*mv);
        if in_check(&after, opp) {
            let replies = generate(&after, opp, true);
            mv.flag = if replies.is_empty() {
                MoveFlag::Checkmate
            } else {
                MoveFlag::Check
            };
        }
    }
}

fn gen_pawn(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1, forward 2 from the start rank with both squares empty
    if let Some(to) = sq(f, r + dir)
        && board.piece_at(to).is_none()
    {
        out.push(Move::new(from, to));
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir)
            && let Some(tpc) = board.piece_at(to)
            && tpc.color != c
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_knight(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
