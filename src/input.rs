//! Loading score submissions for the CLI
//!
//! Submissions come from a JSON array or a TOML document with a
//! `[[submissions]]` table, picked by file extension.

use crate::error::{LeaderboardError, Result};
use crate::types::{PlayerId, ScoreSubmission};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SubmissionFile {
    #[serde(default)]
    submissions: Vec<ScoreSubmission>,
}

/// Players whose rank the demo reports before moving anyone
pub const DEMO_RANK_QUERIES: [PlayerId; 4] = [102, 101, 105, 999];

/// Score change applied halfway through the demo
pub const DEMO_UPDATE: ScoreSubmission = ScoreSubmission {
    player_id: 105,
    score: 1700,
};

/// Replayed when no input file is given
pub fn demo_submissions() -> Vec<ScoreSubmission> {
    [(101, 1500), (102, 1800), (103, 1600), (104, 1800), (105, 1400)]
        .into_iter()
        .map(ScoreSubmission::from)
        .collect()
}

/// Read submissions from `path`
pub fn load_submissions(path: &Path) -> Result<Vec<ScoreSubmission>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read submissions from {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents),
        Some("toml") => parse_toml(&contents),
        other => Err(LeaderboardError::InvalidInput {
            reason: format!(
                "unsupported submissions file extension {:?} (expected .json or .toml)",
                other.unwrap_or("")
            ),
        }
        .into()),
    }
}

/// Parse a JSON array of `{ "player_id": .., "score": .. }` objects
pub fn parse_json(contents: &str) -> Result<Vec<ScoreSubmission>> {
    serde_json::from_str(contents).map_err(|e| {
        LeaderboardError::InvalidInput {
            reason: format!("malformed JSON submissions: {}", e),
        }
        .into()
    })
}

/// Parse a TOML document holding `[[submissions]]` entries
pub fn parse_toml(contents: &str) -> Result<Vec<ScoreSubmission>> {
    toml::from_str::<SubmissionFile>(contents)
        .map(|file| file.submissions)
        .map_err(|e| {
            LeaderboardError::InvalidInput {
                reason: format!("malformed TOML submissions: {}", e),
            }
            .into()
        })
}
