//! Common types used throughout the leaderboard

use serde::{Deserialize, Serialize};

/// Identifier of a ranked player
pub type PlayerId = u64;

/// Score held by a player; higher is better
pub type Score = i64;

/// One incoming score record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_id: PlayerId,
    pub score: Score,
}

impl From<(PlayerId, Score)> for ScoreSubmission {
    fn from((player_id, score): (PlayerId, Score)) -> Self {
        Self { player_id, score }
    }
}

/// A player and the score they are listed with in a top-N result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    pub score: Score,
}

impl From<(PlayerId, Score)> for RankedPlayer {
    fn from((player_id, score): (PlayerId, Score)) -> Self {
        Self { player_id, score }
    }
}

impl std::fmt::Display for RankedPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} score: {}", self.player_id, self.score)
    }
}

/// Score and 1-based competition rank of a single player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub score: Score,
    pub rank: usize, // players tied on score share a rank
}

/// Outcome of recording a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdate<S> {
    /// First score seen for this player
    Inserted,
    /// Player moved from `previous` to the new score
    Updated { previous: S },
    /// Player already held exactly this score
    Unchanged,
}
