use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

// A dummy annotation whose target square is empty, so no tactical term fires
// and the call scores the bare board.
fn probe(b: &Board) -> Move {
    for s in 0..64 {
        if b.piece_at(s).is_none() {
            return Move::new(s, s);
        }
    }
    unreachable!("full board");
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    let mv = probe(&b);
    for h in [&MaterialHeuristic as &dyn Heuristic, &PositionalHeuristic] {
        assert_eq!(h.value(&b, mv, Color::White), 0, "{}", h.name());
        assert_eq!(h.value(&b, mv, Color::Black), 0, "{}", h.name());
    }
}

#[test]
fn test_material_counts_signed() {
    // White is up a rook against a knight.
    let b = board("4k3/8/2n5/8/8/8/3R4/4K3");
    let mv = probe(&b);
    let h = MaterialHeuristic;
    assert_eq!(h.value(&b, mv, Color::White), 200);
    assert_eq!(h.value(&b, mv, Color::Black), -200);
}

#[test]
fn test_symmetry_without_tactical_term() {
    // Rook lands on d4 with nothing covering it for either side, so the
    // score is a pure board term and flips sign with the perspective.
    let b = board("k7/8/8/8/3R4/8/8/7K");
    let mv = Move::new(at("d1"), at("d4"));
    for h in [&MaterialHeuristic as &dyn Heuristic, &PositionalHeuristic] {
        let white = h.value(&b, mv, Color::White);
        let black = h.value(&b, mv, Color::Black);
        assert_eq!(white, -black, "{}", h.name());
        assert!(white > 0, "{}", h.name());
    }
}

#[test]
fn test_checkmate_sentinel_is_signed_by_mover() {
    // Black is up a queen, but the flagged mate dwarfs material either way.
    let b = board("k6R/8/1q6/8/8/8/8/7K");
    let mut mv = Move::new(at("h1"), at("h8"));
    mv.flag = MoveFlag::Checkmate;
    for h in [&MaterialHeuristic as &dyn Heuristic, &PositionalHeuristic] {
        assert_eq!(h.value(&b, mv, Color::White), MATE_SCORE, "{}", h.name());
        assert_eq!(h.value(&b, mv, Color::Black), -MATE_SCORE, "{}", h.name());
    }
}

#[test]
fn test_pst_black_is_vertical_mirror() {
    assert_eq!(
        pst(PieceKind::Pawn, Color::White, at("e2")),
        pst(PieceKind::Pawn, Color::Black, at("e7"))
    );
    assert_eq!(
        pst(PieceKind::Knight, Color::White, at("b1")),
        pst(PieceKind::Knight, Color::Black, at("b8"))
    );
    assert_eq!(
        pst(PieceKind::King, Color::White, at("g1")),
        pst(PieceKind::King, Color::Black, at("g8"))
    );
    // Mirroring is vertical only; files are not flipped.
    assert_eq!(
        pst(PieceKind::Queen, Color::White, at("b3")),
        pst(PieceKind::Queen, Color::Black, at("b6"))
    );
}

#[test]
fn test_pst_prefers_center_knights_and_advanced_pawns() {
    assert_eq!(pst(PieceKind::Knight, Color::White, at("d4")), 20);
    assert_eq!(pst(PieceKind::Knight, Color::White, at("a1")), -50);
    let e2 = pst(PieceKind::Pawn, Color::White, at("e2"));
    let e4 = pst(PieceKind::Pawn, Color::White, at("e4"));
    assert!(e4 > e2);
}

#[test]
fn test_tactical_bonus_for_defended_landing_square() {
    // Knight on c3 covered by the b2 pawn, nothing attacking it.
    let b = board("8/8/8/8/8/2N5/1P6/8");
    let h = PositionalHeuristic;
    let landed = h.value(&b, Move::new(at("b1"), at("c3")), Color::White);
    let baseline = h.value(&b, probe(&b), Color::White);
    assert_eq!(landed - baseline, piece_value(PieceKind::Knight) * 2 / 3);
}

#[test]
fn test_tactical_bonus_doubles_when_contested() {
    // Same knight, now also staring down the c8 rook.
    let b = board("2r5/8/8/8/8/2N5/1P6/8");
    let h = PositionalHeuristic;
    let landed = h.value(&b, Move::new(at("b1"), at("c3")), Color::White);
    let baseline = h.value(&b, probe(&b), Color::White);
    assert_eq!(landed - baseline, piece_value(PieceKind::Knight) * 2 / 3 * 2);
}

#[test]
fn test_tactical_bonus_never_applies_to_kings() {
    // King on d4 covered by the c3 pawn; a defended king earns nothing.
    let b = board("8/8/8/8/3K4/2P5/8/8");
    let h = PositionalHeuristic;
    let landed = h.value(&b, Move::new(at("d3"), at("d4")), Color::White);
    let baseline = h.value(&b, probe(&b), Color::White);
    assert_eq!(landed, baseline);
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 100);
    assert_eq!(piece_value(PieceKind::Knight), 300);
    assert_eq!(piece_value(PieceKind::Bishop), 300);
    assert_eq!(piece_value(PieceKind::Rook), 500);
    assert_eq!(piece_value(PieceKind::Queen), 900);
    assert_eq!(piece_value(PieceKind::King), 1000);
}
