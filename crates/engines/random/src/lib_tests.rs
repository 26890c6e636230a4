use super::*;
use chess_core::{legal_moves, Agent, Board, Color, MaterialHeuristic, MoveFlag, SearchLimits};

#[test]
fn random_strategy_returns_legal_move() {
    let mut strategy = RandomStrategy::new();
    let board = Board::startpos();
    let moves = legal_moves(&board, Color::White);
    let limits = SearchLimits::default();

    let mv = strategy.select_move(&board, Color::White, &moves, &limits);
    assert!(moves.contains(&mv));
}

#[test]
fn random_agent_flags_checkmate() {
    // Scholar's mate: black to move, no legal replies, king in check.
    let board = Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b")
        .unwrap();
    let mut agent = Agent::new(
        Box::new(RandomStrategy::new()),
        Box::new(MaterialHeuristic),
    );

    let mv = agent.next_move(&board, Color::Black, &SearchLimits::default());
    assert_eq!(mv.flag, MoveFlag::Stalemate);
    assert_eq!(mv.from, mv.to);
}

#[test]
fn random_agent_flags_stalemate() {
    // Black king in the corner with no moves and no check.
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b").unwrap();
    let mut agent = Agent::new(
        Box::new(RandomStrategy::new()),
        Box::new(MaterialHeuristic),
    );

    let mv = agent.next_move(&board, Color::Black, &SearchLimits::default());
    assert_eq!(mv.flag, MoveFlag::Stalemate);
}

#[test]
fn random_strategy_varies_its_picks() {
    let mut strategy = RandomStrategy::new();
    let board = Board::startpos();
    let moves = legal_moves(&board, Color::White);
    let limits = SearchLimits::default();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..50 {
        let mv = strategy.select_move(&board, Color::White, &moves, &limits);
        seen.insert((mv.from, mv.to));
    }
    // 50 draws from 20 openings; a single repeated pick would mean a broken RNG hookup.
    assert!(seen.len() > 1);
}
