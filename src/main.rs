//! Command line entry point for the score-ladder leaderboard
//!
//! Loads score submissions, feeds them into a leaderboard and prints the
//! top-N listing followed by the requested player ranks.

use anyhow::Result;
use clap::Parser;
use score_ladder::config::AppConfig;
use score_ladder::input::load_submissions;
use score_ladder::report::{run_demo, write_listing};
use score_ladder::types::PlayerId;
use score_ladder::SharedRankingStore;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Score Ladder - rank players by score
#[derive(Parser)]
#[command(
    name = "score-ladder",
    version,
    about = "Rank players by score and answer top-N and rank queries",
    long_about = "Score Ladder replays a list of score submissions into an in-memory \
                 leaderboard, then prints the highest ranked players and the \
                 competition rank of selected players. Tied players share a rank."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Submissions file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Score submissions as .json or .toml; runs the demo scenario when omitted"
    )]
    input: Option<PathBuf>,

    /// Top-N override
    #[arg(short, long, value_name = "N", help = "Number of top players to print")]
    top: Option<usize>,

    /// Rank queries
    #[arg(
        short,
        long = "rank",
        value_name = "ID",
        help = "Print the rank of this player (repeatable)"
    )]
    ranks: Vec<PlayerId>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without ranking")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, config file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(top) = args.top {
        config.leaderboard.top_n = top;
    }

    if !args.ranks.is_empty() {
        config.leaderboard.rank_queries = args.ranks.clone();
    }

    score_ladder::config::validate_config(&config)?;
    Ok(config)
}

fn run_input(config: &AppConfig, path: &Path) -> Result<()> {
    info!("Loading submissions from: {}", path.display());
    let submissions = match load_submissions(path) {
        Ok(submissions) => submissions,
        Err(e) => {
            error!("Failed to load submissions: {:#}", e);
            std::process::exit(1);
        }
    };

    let leaderboard = SharedRankingStore::new();
    leaderboard.submit_all(submissions)?;

    let stats = leaderboard.get_stats()?;
    info!(
        "Ranked {} players across {} distinct scores from {} submissions",
        stats.players_ranked, stats.distinct_scores, stats.submissions
    );

    write_listing(&mut io::stdout().lock(), &leaderboard, &config.leaderboard)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without ranking");
        return Ok(());
    }

    match &args.input {
        Some(path) => run_input(&config, path),
        None => {
            info!("No input file given, replaying demo submissions");
            run_demo(&mut io::stdout().lock(), &config.leaderboard).map(|_| ())
        }
    }
}
