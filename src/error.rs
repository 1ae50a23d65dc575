//! Error types for the leaderboard
//!
//! The ranking core itself never fails; these errors cover the shared wrapper,
//! configuration loading and input parsing.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific leaderboard scenarios
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal leaderboard error: {message}")]
    InternalError { message: String },
}
