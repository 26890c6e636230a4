//! Arena CLI
//!
//! Run matches between agents and track Elo ratings.

use alphabeta_engine::AlphaBetaStrategy;
use anyhow::{bail, ensure, Context, Result};
use arena::{ArenaConfig, ArenaResults, EloTracker, MatchRunner};
use chess_core::{Agent, Heuristic, MaterialHeuristic, PositionalHeuristic, Strategy};
use greedy_engine::GreedyStrategy;
use minimax_engine::MinimaxStrategy;
use random_engine::RandomStrategy;
use std::env;
use std::path::Path;

/// Where ratings persist between runs
const ELO_FILE: &str = "arena_elo.json";

/// Everyone a gauntlet challenger has to get through
const ROSTER: [&str; 4] = ["random", "greedy", "minimax", "alphabeta"];

fn print_usage() {
    println!("Strategy Arena");
    println!();
    println!("Usage:");
    println!("  arena match <agent1> <agent2> [--games N] [--depth D] [--time MS] [--config FILE]");
    println!("  arena gauntlet <challenger> [--games N] [--depth D] [--time MS] [--config FILE]");
    println!("  arena leaderboard");
    println!();
    println!("Agents are strategy[:heuristic]:");
    println!("  random                - uniform random choice");
    println!("  greedy                - one-ply argmax over generator scores");
    println!("  minimax               - depth-bounded minimax");
    println!("  alphabeta             - minimax with alpha-beta pruning");
    println!("  heuristics: material, positional (default)");
    println!();
    println!("Examples:");
    println!("  arena match alphabeta:positional greedy --games 20 --depth 2");
    println!("  arena gauntlet minimax --games 10 --time 500");
}

fn make_heuristic(name: &str) -> Result<Box<dyn Heuristic>> {
    match name.to_lowercase().as_str() {
        "material" | "mat" => Ok(Box::new(MaterialHeuristic)),
        "positional" | "pos" => Ok(Box::new(PositionalHeuristic)),
        other => bail!("unknown heuristic: {other}"),
    }
}

fn create_agent(spec: &str) -> Result<Agent> {
    let (strategy_name, heuristic_name) = match spec.split_once(':') {
        Some((s, h)) => (s, h),
        None => (spec, "positional"),
    };

    let strategy: Box<dyn Strategy> = match strategy_name.to_lowercase().as_str() {
        "random" => Box::new(RandomStrategy::new()),
        "greedy" => Box::new(GreedyStrategy::new()),
        "minimax" => Box::new(MinimaxStrategy::new(make_heuristic(heuristic_name)?)),
        "alphabeta" | "ab" => Box::new(AlphaBetaStrategy::new(make_heuristic(heuristic_name)?)),
        other => bail!("unknown strategy: {other}"),
    };

    Ok(Agent::new(strategy, make_heuristic(heuristic_name)?))
}

/// Parse shared match/gauntlet arguments. A `--config` file loads first so
/// explicit flags override it; anything unflagged is a positional spec.
fn parse_run_args(args: &[String]) -> Result<(ArenaConfig, Vec<String>)> {
    let mut config = ArenaConfig::default();

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            ensure!(i + 1 < args.len(), "--config needs a file path");
            config = ArenaConfig::load(Path::new(&args[i + 1]))?;
        }
        i += 1;
    }

    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games = args[i + 1].parse().unwrap_or(config.games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--time" | "-t" => {
                if i + 1 < args.len() {
                    config.time_per_move_ms = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--quiet" | "-q" => config.verbose = false,
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    Ok((config, positional))
}

fn run_match(args: &[String]) -> Result<()> {
    let (config, positional) = parse_run_args(args)?;

    let spec1 = positional
        .first()
        .cloned()
        .or_else(|| config.engine1.clone())
        .context("match needs two agent specs (or engine1/engine2 in the config)")?;
    let spec2 = positional
        .get(1)
        .cloned()
        .or_else(|| config.engine2.clone())
        .context("match needs two agent specs (or engine1/engine2 in the config)")?;

    println!("=== Match: {} vs {} ===", spec1, spec2);
    println!("Games: {}, Depth: {}", config.games, config.depth);
    println!();

    let mut agent1 = create_agent(&spec1)?;
    let mut agent2 = create_agent(&spec2)?;

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut agent1, &mut agent2);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        spec1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(&spec1, &spec2, &result);
    tracker.print_leaderboard();
    tracker.save(ELO_FILE)?;

    Ok(())
}

fn run_gauntlet(args: &[String]) -> Result<()> {
    let (config, positional) = parse_run_args(args)?;

    let challenger = positional
        .first()
        .cloned()
        .or_else(|| config.engine1.clone())
        .context("gauntlet needs a challenger spec")?;

    let opponents: Vec<&str> = ROSTER
        .iter()
        .copied()
        .filter(|o| *o != challenger)
        .collect();

    println!("=== Gauntlet: {} vs all ===", challenger);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", config.games, config.depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = ArenaResults::new(
        &format!("Gauntlet: {}", challenger),
        std::iter::once(challenger.clone())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        config.clone(),
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger, opponent);

        let mut challenger_agent = create_agent(&challenger)?;
        let mut opponent_agent = create_agent(opponent)?;

        let runner = MatchRunner::new(config.clone());
        let result = runner.run_match(&mut challenger_agent, &mut opponent_agent);

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(&challenger, opponent, &result);
        results.add_match(&challenger, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();
    tracker.save(ELO_FILE)?;

    Ok(())
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No arena data found. Run some matches first!");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => {
            show_leaderboard();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}
