//! Leaderboard query configuration

use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Which queries the CLI runs after loading submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Number of entries printed for the top-N listing
    pub top_n: usize,
    /// Players whose rank is printed after the listing
    pub rank_queries: Vec<PlayerId>,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            top_n: 3,
            rank_queries: Vec::new(),
        }
    }
}
