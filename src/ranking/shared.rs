//! Thread-safe leaderboard handle
//!
//! Wraps a single [`RankingStore`] behind one `RwLock` so a submission always
//! moves a player between buckets under an exclusive lock, and records
//! operation statistics alongside it.
//!
//! Locks are always taken store first, then stats. Submission counters are
//! written while the store write guard is still held, and the size fields of
//! [`LeaderboardStats`] are read from the store itself, so a stats snapshot
//! always matches the board it was taken from.

use crate::error::{LeaderboardError, Result};
use crate::ranking::store::RankingStore;
use crate::types::{PlayerId, PlayerStanding, RankedPlayer, Score, ScoreSubmission, ScoreUpdate};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Statistics about leaderboard operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardStats {
    /// Total number of score submissions
    pub submissions: u64,
    /// Submissions that introduced a new player
    pub players_added: u64,
    /// Submissions that moved a player to a different score
    pub scores_changed: u64,
    /// Submissions that repeated a player's current score
    pub scores_unchanged: u64,
    /// Total number of rank lookups
    pub rank_queries: u64,
    /// Rank lookups for unknown players
    pub rank_misses: u64,
    /// Current number of ranked players, filled in by `get_stats`
    pub players_ranked: usize,
    /// Current number of distinct scores, filled in by `get_stats`
    pub distinct_scores: usize,
}

/// Cloneable handle to a leaderboard shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedRankingStore {
    store: Arc<RwLock<RankingStore<PlayerId, Score>>>,
    stats: Arc<RwLock<LeaderboardStats>>,
}

impl SharedRankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated store
    pub fn from_store(store: RankingStore<PlayerId, Score>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            stats: Arc::new(RwLock::new(LeaderboardStats::default())),
        }
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, RankingStore<PlayerId, Score>>> {
        self.store.read().map_err(|_| {
            LeaderboardError::InternalError {
                message: "Failed to acquire leaderboard read lock".to_string(),
            }
            .into()
        })
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, RankingStore<PlayerId, Score>>> {
        self.store.write().map_err(|_| {
            LeaderboardError::InternalError {
                message: "Failed to acquire leaderboard write lock".to_string(),
            }
            .into()
        })
    }

    fn update_stats<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut LeaderboardStats),
    {
        let mut stats = self
            .stats
            .write()
            .map_err(|_| LeaderboardError::InternalError {
                message: "Failed to acquire stats write lock".to_string(),
            })?;
        update(&mut stats);
        Ok(())
    }

    /// Record a player's score
    pub fn submit_score(&self, player_id: PlayerId, score: Score) -> Result<ScoreUpdate<Score>> {
        let mut store = self.write_store()?;
        let update = store.submit_score(player_id, score);

        match update {
            ScoreUpdate::Inserted => debug!("Player {} entered with score {}", player_id, score),
            ScoreUpdate::Updated { previous } => debug!(
                "Player {} moved from score {} to {}",
                player_id, previous, score
            ),
            ScoreUpdate::Unchanged => debug!("Player {} resubmitted score {}", player_id, score),
        }

        self.update_stats(|stats| {
            stats.submissions += 1;
            match update {
                ScoreUpdate::Inserted => stats.players_added += 1,
                ScoreUpdate::Updated { .. } => stats.scores_changed += 1,
                ScoreUpdate::Unchanged => stats.scores_unchanged += 1,
            }
        })?;
        drop(store);

        Ok(update)
    }

    /// Record a batch of submissions under a single write lock
    pub fn submit_all<I>(&self, submissions: I) -> Result<()>
    where
        I: IntoIterator<Item = ScoreSubmission>,
    {
        let mut added = 0u64;
        let mut changed = 0u64;
        let mut unchanged = 0u64;

        let mut store = self.write_store()?;
        for submission in submissions {
            match store.submit_score(submission.player_id, submission.score) {
                ScoreUpdate::Inserted => added += 1,
                ScoreUpdate::Updated { .. } => changed += 1,
                ScoreUpdate::Unchanged => unchanged += 1,
            }
        }

        debug!(
            "Applied {} submissions ({} new players, {} score changes)",
            added + changed + unchanged,
            added,
            changed
        );

        self.update_stats(|stats| {
            stats.submissions += added + changed + unchanged;
            stats.players_added += added;
            stats.scores_changed += changed;
            stats.scores_unchanged += unchanged;
        })?;
        drop(store);

        Ok(())
    }

    /// The first `n` players in descending score order; tie order is unspecified
    pub fn top_n(&self, n: usize) -> Result<Vec<RankedPlayer>> {
        let store = self.read_store()?;
        Ok(store.top_n(n).into_iter().map(RankedPlayer::from).collect())
    }

    /// Competition rank of `player_id`, `None` if it has never submitted a score
    pub fn rank_of(&self, player_id: PlayerId) -> Result<Option<usize>> {
        let store = self.read_store()?;
        let rank = store.rank_of(&player_id);

        self.update_stats(|stats| {
            stats.rank_queries += 1;
            if rank.is_none() {
                stats.rank_misses += 1;
            }
        })?;
        drop(store);

        Ok(rank)
    }

    /// Like [`SharedRankingStore::rank_of`], but an unknown player is an error
    pub fn require_rank(&self, player_id: PlayerId) -> Result<usize> {
        self.rank_of(player_id)?.ok_or_else(|| {
            LeaderboardError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into()
        })
    }

    pub fn score_of(&self, player_id: PlayerId) -> Result<Option<Score>> {
        Ok(self.read_store()?.score_of(&player_id).copied())
    }

    pub fn standing(&self, player_id: PlayerId) -> Result<Option<PlayerStanding>> {
        Ok(self.read_store()?.standing(player_id))
    }

    pub fn player_count(&self) -> Result<usize> {
        Ok(self.read_store()?.len())
    }

    pub fn get_stats(&self) -> Result<LeaderboardStats> {
        let store = self.read_store()?;
        let mut stats = self
            .stats
            .read()
            .map(|stats| stats.clone())
            .map_err(|_| LeaderboardError::InternalError {
                message: "Failed to acquire stats read lock".to_string(),
            })?;

        stats.players_ranked = store.len();
        stats.distinct_scores = store.bucket_count();
        Ok(stats)
    }

    /// Clone of the underlying store for read-heavy callers
    pub fn to_store(&self) -> Result<RankingStore<PlayerId, Score>> {
        Ok(self.read_store()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn create_test_leaderboard() -> SharedRankingStore {
        let leaderboard = SharedRankingStore::new();
        leaderboard
            .submit_all(
                [(101, 1500), (102, 1800), (103, 1600), (104, 1800), (105, 1400)]
                    .into_iter()
                    .map(ScoreSubmission::from),
            )
            .unwrap();
        leaderboard
    }

    #[test]
    fn test_submit_and_query() {
        let leaderboard = create_test_leaderboard();

        assert_eq!(leaderboard.rank_of(102).unwrap(), Some(1));
        assert_eq!(leaderboard.rank_of(101).unwrap(), Some(4));
        assert_eq!(leaderboard.rank_of(999).unwrap(), None);
        assert_eq!(leaderboard.score_of(103).unwrap(), Some(1600));
        assert_eq!(leaderboard.player_count().unwrap(), 5);

        let top = leaderboard.top_n(3).unwrap();
        assert_eq!(top[2], RankedPlayer { player_id: 103, score: 1600 });
    }

    #[test]
    fn test_require_rank_unknown_player() {
        let leaderboard = create_test_leaderboard();
        assert_eq!(leaderboard.require_rank(105).unwrap(), 5);

        let err = leaderboard.require_rank(999).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LeaderboardError>(),
            Some(LeaderboardError::PlayerNotFound { player_id }) if player_id == "999"
        ));
    }

    #[test]
    fn test_stats_tracking() {
        let leaderboard = create_test_leaderboard();
        leaderboard.submit_score(105, 1700).unwrap();
        leaderboard.submit_score(105, 1700).unwrap();
        leaderboard.rank_of(105).unwrap();
        leaderboard.rank_of(999).unwrap();

        let stats = leaderboard.get_stats().unwrap();
        assert_eq!(stats.submissions, 7);
        assert_eq!(stats.players_added, 5);
        assert_eq!(stats.scores_changed, 1);
        assert_eq!(stats.scores_unchanged, 1);
        assert_eq!(stats.rank_queries, 2);
        assert_eq!(stats.rank_misses, 1);
        assert_eq!(stats.players_ranked, 5);
        assert_eq!(stats.distinct_scores, 4);
    }

    #[test]
    fn test_stats_match_board_under_concurrent_writes() {
        let leaderboard = SharedRankingStore::new();

        let writers: Vec<_> = (0..8u64)
            .map(|worker| {
                let leaderboard = leaderboard.clone();
                thread::spawn(move || {
                    for i in 0..200u64 {
                        leaderboard
                            .submit_score(worker * 1000 + i, (i % 7) as Score)
                            .unwrap();
                    }
                })
            })
            .collect();

        let checker = {
            let leaderboard = leaderboard.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    // Every submission here adds a new player
                    let stats = leaderboard.get_stats().unwrap();
                    assert_eq!(stats.players_added, stats.players_ranked as u64);
                    assert_eq!(stats.submissions, stats.players_added);
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        checker.join().unwrap();

        let stats = leaderboard.get_stats().unwrap();
        assert_eq!(stats.players_ranked, leaderboard.player_count().unwrap());
        assert_eq!(stats.players_ranked, 1600);
        assert_eq!(stats.distinct_scores, 7);
    }

    #[test]
    fn test_from_store_seeds_stats() {
        let store: RankingStore<PlayerId, Score> = [(1, 10), (2, 10)].into_iter().collect();
        let leaderboard = SharedRankingStore::from_store(store);

        let stats = leaderboard.get_stats().unwrap();
        assert_eq!(stats.players_ranked, 2);
        assert_eq!(stats.distinct_scores, 1);
        assert_eq!(stats.submissions, 0);
    }

    #[test]
    fn test_concurrent_submissions() {
        let leaderboard = SharedRankingStore::new();

        let handles: Vec<_> = (0..4u64)
            .map(|worker| {
                let leaderboard = leaderboard.clone();
                thread::spawn(move || {
                    for i in 0..100u64 {
                        let player_id = worker * 1000 + i;
                        leaderboard.submit_score(player_id, (i % 10) as Score).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(leaderboard.player_count().unwrap(), 400);
        // 40 players hold each of the scores 0..10
        assert_eq!(leaderboard.rank_of(9).unwrap(), Some(1));
        assert_eq!(leaderboard.rank_of(8).unwrap(), Some(41));
        assert_eq!(leaderboard.get_stats().unwrap().distinct_scores, 10);
    }
}
