use super::*;
use crate::heuristics::{MATE_SCORE, MaterialHeuristic};

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(at(from), at(to))
}

#[test]
fn test_startpos_has_20_moves() {
    let b = Board::startpos();
    assert_eq!(legal_moves(&b, Color::White).len(), 20);
    assert_eq!(legal_moves(&b, Color::Black).len(), 20);
}

#[test]
fn test_kiwipete_without_castling() {
    // The classic generator position counts 48 here; two of those are
    // castles, which this rule set does not play.
    let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(legal_moves(&b, Color::White).len(), 46);
}

#[test]
fn test_lone_piece_move_counts() {
    let cases = [
        ("8/8/8/8/3R4/8/8/8", "d4", 14),
        ("8/8/8/8/3B4/8/8/8", "d4", 13),
        ("8/8/8/8/3Q4/8/8/8", "d4", 27),
        ("8/8/8/8/3K4/8/8/8", "d4", 8),
        ("8/8/8/8/8/8/8/N7", "a1", 2),
    ];
    for (fen, from, expected) in cases {
        let b = board(fen);
        let moves = legal_moves(&b, Color::White);
        assert_eq!(moves.len(), expected, "piece on {from} in {fen}");
        assert!(moves.iter().all(|m| m.from == at(from)));
    }
}

#[test]
fn test_pawn_pushes_and_captures() {
    // e4 pawn flanked by capturable pawns on d5 and f5
    let b = board("8/8/8/3p1p2/4P3/8/8/8");
    let white = legal_moves(&b, Color::White);
    assert_eq!(white.len(), 3);
    assert!(white.contains(&mv("e4", "e5")));
    assert!(white.contains(&mv("e4", "d5")));
    assert!(white.contains(&mv("e4", "f5")));

    let black = legal_moves(&b, Color::Black);
    assert_eq!(black.len(), 4);
    assert!(black.contains(&mv("d5", "e4")));
    assert!(black.contains(&mv("f5", "e4")));
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    // Own knight on e3 stops the e2 pawn entirely
    let b = board("8/8/8/8/8/4N3/4P3/8");
    let moves = legal_moves(&b, Color::White);
    assert!(moves.iter().all(|m| m.from != at("e2")));

    // Enemy knight on e4 leaves only the single push
    let b = board("8/8/8/8/4n3/8/4P3/8");
    let moves = legal_moves(&b, Color::White);
    assert_eq!(moves, vec![mv("e2", "e3")]);
}

#[test]
fn test_moves_into_check_are_excluded() {
    // King on e1 staring up the file at a rook on e8: e2 is off limits.
    let b = board("4r3/8/8/8/8/8/8/4K3");
    let moves = legal_moves(&b, Color::White);
    assert_eq!(moves.len(), 4);
    assert!(!moves.contains(&mv("e1", "e2")));
    for c in ["d1", "f1", "d2", "f2"] {
        assert!(moves.contains(&mv("e1", c)), "missing e1{c}");
    }
}

#[test]
fn test_pinned_piece_cannot_move_away() {
    // The d2 rook shields its king from the d8 rook and may only slide
    // along the pin file.
    let b = board("3r4/8/8/8/8/8/3R4/3K4");
    let moves = legal_moves(&b, Color::White);
    for m in moves.iter().filter(|m| m.from == at("d2")) {
        assert_eq!(file_of(m.to), file_of(at("d2")), "rook left the pin: {m}");
    }
}

#[test]
fn test_check_flag() {
    // Rook lifts to e4 or d8 give check along lines to the e8 king.
    let b = board("4k3/8/8/8/3R4/8/8/8");
    let moves = legal_moves(&b, Color::White);
    let find = |m: Move| moves.iter().find(|x| **x == m).copied().unwrap();
    assert_eq!(find(mv("d4", "e4")).flag, MoveFlag::Check);
    assert_eq!(find(mv("d4", "d8")).flag, MoveFlag::Check);
    assert_eq!(find(mv("d4", "a4")).flag, MoveFlag::None);
}

#[test]
fn test_checkmate_flag_back_rank() {
    let b = board("7k/6pp/8/8/8/8/8/R7");
    let moves = legal_moves(&b, Color::White);
    let mate = moves.iter().find(|m| **m == mv("a1", "a8")).copied().unwrap();
    assert_eq!(mate.flag, MoveFlag::Checkmate);

    // The mated side really has nothing.
    let after = b.apply(mate);
    assert!(legal_moves(&after, Color::Black).is_empty());
    assert!(in_check(&after, Color::Black));
}

#[test]
fn test_escapable_check_is_not_mate() {
    // Same back rank raid, but without a g7 pawn the king slips out.
    let b = board("7k/7p/8/8/8/8/8/R7");
    let moves = legal_moves(&b, Color::White);
    let raid = moves.iter().find(|m| **m == mv("a1", "a8")).copied().unwrap();
    assert_eq!(raid.flag, MoveFlag::Check);
}

#[test]
fn test_stalemate_is_empty_and_unflagged() {
    // Black to move: king cornered by queen and king, not in check.
    let b = board("k7/8/1Q6/8/8/8/8/1K6");
    assert!(legal_moves(&b, Color::Black).is_empty());
    assert!(!in_check(&b, Color::Black));
}

#[test]
fn test_legality_invariant() {
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ];
    for fen in positions {
        let b = board(fen);
        for side in [Color::White, Color::Black] {
            for m in legal_moves(&b, side) {
                let pc = b.piece_at(m.from).unwrap_or_else(|| panic!("{m} moves nothing"));
                assert_eq!(pc.color, side, "{m} moves an enemy piece");
                assert!(
                    b.piece_at(m.to).is_none_or(|t| t.color != side),
                    "{m} captures its own piece"
                );
                assert!(!in_check(&b.apply(m), side), "{m} leaves the king hanging");
            }
        }
    }
}

#[test]
fn test_scored_moves_annotations() {
    // Taking the queen on d5 beats shuffling along the fourth rank.
    let b = board("4k3/8/8/3q4/3R4/8/8/4K3");
    let h = MaterialHeuristic;
    let moves = scored_moves(&b, Color::White, &h);
    let take = moves.iter().find(|m| **m == mv("d4", "d5")).copied().unwrap();
    let shuffle = moves.iter().find(|m| **m == mv("d4", "h4")).copied().unwrap();
    assert!(take.score > shuffle.score);
    assert_eq!(take.score - shuffle.score, 900);
}

#[test]
fn test_scored_moves_mate_scores_sentinel() {
    let b = board("7k/6pp/8/8/8/8/8/R7");
    let h = MaterialHeuristic;
    let moves = scored_moves(&b, Color::White, &h);
    let mate = moves.iter().find(|m| **m == mv("a1", "a8")).copied().unwrap();
    assert_eq!(mate.flag, MoveFlag::Checkmate);
    assert_eq!(mate.score, MATE_SCORE);
}
