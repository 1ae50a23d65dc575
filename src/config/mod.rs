//! Configuration management for the score-ladder CLI
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;
pub mod leaderboard;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use leaderboard::LeaderboardSettings;
