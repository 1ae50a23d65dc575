//! Leaderboard ranking core
//!
//! This module provides the dual-index ranking store and a lock-guarded
//! handle for sharing one store between threads.

pub mod shared;
pub mod store;

// Re-export commonly used types
pub use shared::{LeaderboardStats, SharedRankingStore};
pub use store::RankingStore;
