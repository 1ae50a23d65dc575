//! Main application configuration
//!
//! This module defines the configuration structures for the score-ladder
//! CLI, including environment variable and TOML file loading and validation.

use crate::config::leaderboard::LeaderboardSettings;
use crate::error::LeaderboardError;
use crate::types::PlayerId;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub leaderboard: LeaderboardSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "score-ladder".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            LeaderboardError::ConfigurationError {
                message: format!("Invalid configuration file: {}", e),
            }
            .into()
        })
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(top_n) = env::var("LEADERBOARD_TOP_N") {
            self.leaderboard.top_n = top_n
                .parse()
                .map_err(|_| anyhow!("Invalid LEADERBOARD_TOP_N value: {}", top_n))?;
        }
        if let Ok(queries) = env::var("LEADERBOARD_RANK_QUERIES") {
            self.leaderboard.rank_queries = parse_id_list(&queries)
                .map_err(|_| anyhow!("Invalid LEADERBOARD_RANK_QUERIES value: {}", queries))?;
        }
        Ok(())
    }
}

/// Parse a comma separated list of player ids, ignoring blank entries
fn parse_id_list(raw: &str) -> std::result::Result<Vec<PlayerId>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    Ok(())
}
