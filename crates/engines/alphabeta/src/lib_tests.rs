use super::*;
use chess_core::{coord_to_sq, Agent, MaterialHeuristic};
use minimax_engine::MinimaxStrategy;
use std::time::Duration;

fn alphabeta_agent() -> Agent {
    Agent::new(
        Box::new(AlphaBetaStrategy::new(Box::new(MaterialHeuristic))),
        Box::new(MaterialHeuristic),
    )
}

fn minimax_agent() -> Agent {
    Agent::new(
        Box::new(MinimaxStrategy::new(Box::new(MaterialHeuristic))),
        Box::new(MaterialHeuristic),
    )
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(coord_to_sq(from).unwrap(), coord_to_sq(to).unwrap())
}

#[test]
fn alphabeta_takes_mate_in_one() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R6K w").unwrap();
    let mut agent = alphabeta_agent();

    let pick = agent.next_move(&board, Color::White, &SearchLimits::default());
    assert_eq!(pick, mv("a1", "a8"));
    assert_eq!(pick.flag, MoveFlag::Checkmate);
    assert_eq!(pick.score, MATE_SCORE);
}

#[test]
fn root_scores_match_plain_minimax() {
    // Full-window root children mean pruning can never change a root score,
    // only the work done to reach it.
    let positions = [
        ("6k1/5ppp/8/8/8/8/8/R6K w", Color::White, true),
        ("r6k/8/8/8/8/8/5PPP/6K1 b", Color::Black, true),
        ("7k/8/8/3q4/8/8/3R4/7K w", Color::White, true),
        ("7k/8/4p3/3p4/8/8/8/3Q3K w", Color::White, false),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
            Color::White,
            false,
        ),
    ];

    for (fen, mover, unique_best) in positions {
        let board = Board::from_fen(fen).unwrap();
        let ab = alphabeta_agent().next_move(&board, mover, &SearchLimits::depth(2));
        let mm = minimax_agent().next_move(&board, mover, &SearchLimits::depth(2));

        assert_eq!(ab.score, mm.score, "diverged on {fen}");
        if unique_best {
            assert_eq!(ab, mm, "diverged on {fen}");
        }
    }
}

#[test]
fn pruning_visits_no_extra_nodes() {
    let board = Board::from_fen("7k/8/4p3/3p4/8/8/8/3Q3K w").unwrap();

    let mut ab = alphabeta_agent();
    ab.enable_trace(true);
    ab.next_move(&board, Color::White, &SearchLimits::depth(2));
    let ab_nodes = ab.take_trace().unwrap().node_count();

    let mut mm = minimax_agent();
    mm.enable_trace(true);
    mm.next_move(&board, Color::White, &SearchLimits::depth(2));
    let mm_nodes = mm.take_trace().unwrap().node_count();

    assert!(ab_nodes > 0);
    assert!(ab_nodes <= mm_nodes);
}

#[test]
fn stalemate_trap_still_reads_zero() {
    let board = Board::from_fen("k7/8/8/8/8/8/1Q6/1K6 w").unwrap();
    let mut agent = alphabeta_agent();

    let pick = agent.next_move(&board, Color::White, &SearchLimits::default());
    assert_ne!(pick, mv("b2", "b6"));
    assert!(pick.score > 0);
}

#[test]
fn expired_clock_falls_back_to_annotations() {
    let board = Board::from_fen("7k/8/4p3/3p4/8/8/8/3Q3K w").unwrap();
    let mut agent = alphabeta_agent();

    let limits = SearchLimits::depth_and_time(3, Duration::ZERO);
    let pick = agent.next_move(&board, Color::White, &limits);
    assert_eq!(pick, mv("d1", "d5"));
}
