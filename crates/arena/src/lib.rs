//! Strategy Arena
//!
//! This crate provides infrastructure for:
//! - Running matches between agents built from any strategy/heuristic pair
//! - Tracking Elo ratings across strategies
//! - Generating reports from arena runs
//!
//! # Usage
//!
//! ```bash
//! # Run a match between two agents
//! cargo run -p arena -- match alphabeta:positional greedy --games 20
//!
//! # Run a gauntlet (one agent vs the rest of the roster)
//! cargo run -p arena -- gauntlet minimax --games 10
//!
//! # Show the stored leaderboard
//! cargo run -p arena -- leaderboard
//! ```

mod config;
mod match_runner;
mod rating;
mod results;

pub use config::*;
pub use match_runner::*;
pub use rating::*;
pub use results::*;
