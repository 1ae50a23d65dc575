//! Score Ladder - in-memory leaderboard
//!
//! This crate keeps players ranked by score, answering top-N and
//! competition-rank queries without re-sorting after every update.

pub mod config;
pub mod error;
pub mod input;
pub mod ranking;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{LeaderboardError, Result};
pub use types::*;

// Re-export key components
pub use ranking::{LeaderboardStats, RankingStore, SharedRankingStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
