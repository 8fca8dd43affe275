use std::{
    fs,
    io::Write,
    path::{Path, PathBuf}
};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::ProcessorError,
    model::{
        constants::ProgressionConfig,
        matchday::{MatchdayReport, PerformanceEntry, PlayerOutcome},
        structures::player_record::PlayerEntry
    }
};

/// A match day file as written by the match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchdayInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<FixedOffset>>,
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub performances: Vec<PerformanceEntry>
}

/// The processor's output: every outcome plus the updated squad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchdayOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<DateTime<FixedOffset>>,
    pub outcomes: Vec<PlayerOutcome>,
    pub players: Vec<PlayerEntry>
}

impl MatchdayOutput {
    pub fn new(report: MatchdayReport, players: Vec<PlayerEntry>) -> MatchdayOutput {
        MatchdayOutput {
            played_at: report.played_at,
            outcomes: report.outcomes,
            players
        }
    }
}

fn read(path: &Path) -> Result<String, ProcessorError> {
    fs::read_to_string(path).map_err(|e| ProcessorError::io(path, e))
}

pub fn load_matchday(path: &Path) -> Result<MatchdayInput, ProcessorError> {
    let input: MatchdayInput = serde_json::from_str(&read(path)?)?;
    info!(
        "Loaded {} players and {} performances from {}",
        input.players.len(),
        input.performances.len(),
        path.display()
    );

    Ok(input)
}

/// Loads and validates a config file. Without a path the default game balance is used.
pub fn load_config(path: Option<&Path>) -> Result<ProgressionConfig, ProcessorError> {
    let config = match path {
        Some(path) => {
            info!("Loading progression config from {}", path.display());
            serde_json::from_str(&read(path)?)?
        }
        None => ProgressionConfig::default()
    };

    config.validate()?;

    Ok(config)
}

/// Writes the output as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_output(output: &MatchdayOutput, path: Option<&PathBuf>) -> Result<(), ProcessorError> {
    let json = serde_json::to_string_pretty(output)?;

    match path {
        Some(path) => {
            fs::write(path, json).map_err(|e| ProcessorError::io(path, e))?;
            info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|e| ProcessorError::io("<stdout>", e))?;
        }
    }

    Ok(())
}
