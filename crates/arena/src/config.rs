//! Arena configuration, loadable from TOML

use anyhow::Context;
use chess_core::SearchLimits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for an arena run.
///
/// Every field has a default, so a config file only needs the fields it
/// wants to change. Agent specs are `strategy[:heuristic]`, for example
/// `alphabeta:positional` or `greedy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games per match
    pub games: u32,
    /// Search depth handed to the agents
    pub depth: u8,
    /// Time budget per move in milliseconds (None = no limit)
    pub time_per_move_ms: Option<u64>,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print per-game progress during a match
    pub verbose: bool,
    /// Agent spec for the first seat (used when the CLI gives none)
    pub engine1: Option<String>,
    /// Agent spec for the second seat (used when the CLI gives none)
    pub engine2: Option<String>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            depth: 2,
            time_per_move_ms: None,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
            engine1: None,
            engine2: None,
        }
    }
}

impl ArenaConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Search limits for one move under this config.
    pub fn search_limits(&self) -> SearchLimits {
        match self.time_per_move_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}
