//! Game records, run summaries and JSON output

use chess_core::{DrawReason, GameStatus};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SelfPlayConfig;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
    /// Ply cap reached, or a player offered no move
    Unfinished,
}

impl GameOutcome {
    pub fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Ongoing => GameOutcome::Unfinished,
            GameStatus::Checkmate { winner } => match winner {
                chess_core::Color::White => GameOutcome::WhiteWins,
                chess_core::Color::Black => GameOutcome::BlackWins,
            },
            GameStatus::Draw(reason) => GameOutcome::Draw(reason),
        }
    }

    pub fn score(&self) -> &'static str {
        match self {
            GameOutcome::WhiteWins => "1-0",
            GameOutcome::BlackWins => "0-1",
            GameOutcome::Draw(_) => "1/2-1/2",
            GameOutcome::Unfinished => "*",
        }
    }
}

/// One played game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub plies: usize,
}

/// Outcome tallies over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub insufficient_material: u32,
    pub repetitions: u32,
    pub fifty_move: u32,
    pub unfinished: u32,
}

impl Summary {
    pub fn record(&mut self, outcome: GameOutcome) {
        let slot = match outcome {
            GameOutcome::WhiteWins => &mut self.white_wins,
            GameOutcome::BlackWins => &mut self.black_wins,
            GameOutcome::Draw(DrawReason::Stalemate) => &mut self.stalemates,
            GameOutcome::Draw(DrawReason::InsufficientMaterial) => &mut self.insufficient_material,
            GameOutcome::Draw(DrawReason::Repetition) => &mut self.repetitions,
            GameOutcome::Draw(DrawReason::FiftyMove) => &mut self.fifty_move,
            GameOutcome::Unfinished => &mut self.unfinished,
        };
        *slot += 1;
    }

    pub fn draws(&self) -> u32 {
        self.stalemates + self.insufficient_material + self.repetitions + self.fifty_move
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws() + self.unfinished
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Self-play: {} games ===\n\n", self.total()));
        let rows = [
            ("White wins", self.white_wins),
            ("Black wins", self.black_wins),
            ("Draws", self.draws()),
            ("  stalemate", self.stalemates),
            ("  insufficient material", self.insufficient_material),
            ("  repetition", self.repetitions),
            ("  fifty-move rule", self.fifty_move),
            ("Unfinished", self.unfinished),
        ];
        for (label, count) in rows {
            report.push_str(&format!("{:<26}{:>6}\n", label, count));
        }
        report
    }
}

/// Complete results of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayResults {
    pub config: SelfPlayConfig,
    pub games: Vec<GameRecord>,
    pub summary: Summary,
}

impl SelfPlayResults {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self {
            config,
            games: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        self.summary.record(record.outcome);
        self.games.push(record);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, OutputError> {
        let contents = std::fs::read_to_string(path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
