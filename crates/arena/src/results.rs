//! Arena results storage and reporting

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ArenaConfig;
use crate::rating::MatchResult;

/// Complete results of an arena run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    /// Name/description of the run
    pub name: String,
    /// Participating agents (spec strings)
    pub participants: Vec<String>,
    /// All match results, in play order
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: ArenaConfig,
}

/// A single match entry in an arena run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl ArenaResults {
    pub fn new(name: &str, participants: Vec<String>, config: ArenaConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}\n\n",
            self.config.games, self.config.depth
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Agent 1", "Agent 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
