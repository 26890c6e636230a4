//! Match runner for playing games between agents

use chess_core::{in_check, Agent, Board, Color, MoveFlag};
use tracing::warn;

use crate::config::ArenaConfig;
use crate::rating::{GameResult, MatchResult};

/// Runs matches between two agents
pub struct MatchRunner {
    config: ArenaConfig,
}

impl MatchRunner {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective
    pub fn run_match(&self, agent1: &mut Agent, agent2: &mut Agent) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let agent1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if agent1_white {
                self.play_game(agent1, agent2)
            } else {
                // Flip result since agent1 is black
                match self.play_game(agent2, agent1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if agent1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective
    fn play_game(&self, white: &mut Agent, black: &mut Agent) -> GameResult {
        let mut board = Board::startpos();
        let mut side = Color::White;
        white.new_game();
        black.new_game();

        for _ply in 0..self.config.max_moves {
            // Fresh limits each move so the clock restarts
            let limits = self.config.search_limits();

            let mv = match side {
                Color::White => white.next_move(&board, side, &limits),
                Color::Black => black.next_move(&board, side, &limits),
            };

            if mv.flag == MoveFlag::Stalemate {
                // The side to move has nothing to play. That is mate if it
                // stands in check (its opponent just missed the flag), else
                // a stalemate draw.
                return if in_check(&board, side) {
                    white_result(side.other())
                } else {
                    GameResult::Draw
                };
            }

            // The opposing agent referees the claim before it lands
            let accepted = match side {
                Color::White => black.validate_move(&board, side, mv),
                Color::Black => white.validate_move(&board, side, mv),
            };
            if !accepted {
                warn!(mover = ?side, claimed = %mv, "illegal move claimed, game forfeited");
                return white_result(side.other());
            }

            board = board.apply(mv);

            if mv.flag == MoveFlag::Checkmate {
                return white_result(side);
            }

            side = side.other();
        }

        // Move cap reached
        GameResult::Draw
    }
}

/// Game result from White's perspective given the winning side
fn white_result(winner: Color) -> GameResult {
    match winner {
        Color::White => GameResult::Win,
        Color::Black => GameResult::Loss,
    }
}

/// Quick utility to run a single match
pub fn quick_match(agent1: &mut Agent, agent2: &mut Agent, games: u32, depth: u8) -> MatchResult {
    let config = ArenaConfig {
        games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(agent1, agent2)
}
