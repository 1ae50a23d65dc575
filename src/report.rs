//! Console reports for the CLI
//!
//! Everything is written to a caller supplied `Write` so the listings can be
//! checked in tests.

use crate::config::LeaderboardSettings;
use crate::error::Result;
use crate::input::{demo_submissions, DEMO_RANK_QUERIES, DEMO_UPDATE};
use crate::ranking::SharedRankingStore;
use crate::types::PlayerId;
use std::io::Write;
use tracing::info;

/// Print `Top N players:` followed by one line per listed player
pub fn write_top<W: Write>(
    out: &mut W,
    leaderboard: &SharedRankingStore,
    n: usize,
) -> Result<()> {
    writeln!(out, "Top {} players:", n)?;
    for player in leaderboard.top_n(n)? {
        writeln!(out, "{}", player)?;
    }
    Ok(())
}

/// Print one rank line for `player_id`
pub fn write_rank<W: Write>(
    out: &mut W,
    leaderboard: &SharedRankingStore,
    player_id: PlayerId,
) -> Result<()> {
    match leaderboard.rank_of(player_id)? {
        Some(rank) => writeln!(out, "Player {} rank: {}", player_id, rank)?,
        None => writeln!(out, "Player {} rank: not found", player_id)?,
    }
    Ok(())
}

/// Top-N listing followed by the configured rank queries
pub fn write_listing<W: Write>(
    out: &mut W,
    leaderboard: &SharedRankingStore,
    settings: &LeaderboardSettings,
) -> Result<()> {
    write_top(out, leaderboard, settings.top_n)?;

    if !settings.rank_queries.is_empty() {
        writeln!(out, "\nRanks:")?;
        for &player_id in &settings.rank_queries {
            write_rank(out, leaderboard, player_id)?;
        }
    }

    Ok(())
}

/// Replay the demo board, move one player and report before and after
///
/// Configured rank queries replace the demo's own list when present.
pub fn run_demo<W: Write>(
    out: &mut W,
    settings: &LeaderboardSettings,
) -> Result<SharedRankingStore> {
    let leaderboard = SharedRankingStore::new();
    leaderboard.submit_all(demo_submissions())?;

    let mut first_pass = settings.clone();
    if first_pass.rank_queries.is_empty() {
        first_pass.rank_queries = DEMO_RANK_QUERIES.to_vec();
    }
    write_listing(out, &leaderboard, &first_pass)?;

    info!(
        "Moving player {} to score {}",
        DEMO_UPDATE.player_id, DEMO_UPDATE.score
    );
    leaderboard.submit_score(DEMO_UPDATE.player_id, DEMO_UPDATE.score)?;

    writeln!(
        out,
        "\nAfter updating Player {}'s score to {}:",
        DEMO_UPDATE.player_id, DEMO_UPDATE.score
    )?;
    write_rank(out, &leaderboard, DEMO_UPDATE.player_id)?;

    writeln!(out)?;
    write_top(out, &leaderboard, leaderboard.player_count()?)?;

    Ok(leaderboard)
}
