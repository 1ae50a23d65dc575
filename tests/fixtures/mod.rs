//! Shared leaderboard fixtures for integration testing

#![allow(dead_code)]

use score_ladder::types::{PlayerId, Score, ScoreSubmission};
use score_ladder::RankingStore;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// The five-player board used throughout the integration tests
pub fn reference_submissions() -> Vec<ScoreSubmission> {
    [(101, 1500), (102, 1800), (103, 1600), (104, 1800), (105, 1400)]
        .into_iter()
        .map(ScoreSubmission::from)
        .collect()
}

pub fn reference_store() -> RankingStore<PlayerId, Score> {
    reference_submissions()
        .into_iter()
        .map(|s| (s.player_id, s.score))
        .collect()
}

/// Check that the score index and the bucket index agree
pub fn assert_indices_agree<P, S>(store: &RankingStore<P, S>)
where
    P: Hash + Eq + Clone + Debug,
    S: Ord + Clone + Debug,
{
    let mut from_buckets = HashSet::new();
    let mut previous: Option<&S> = None;

    for (score, players) in store.buckets() {
        assert!(!players.is_empty(), "bucket {:?} is empty", score);
        if let Some(higher) = previous {
            assert!(higher > score, "bucket {:?} out of order", score);
        }
        previous = Some(score);

        for player in players {
            assert_eq!(store.score_of(player), Some(score));
            assert!(from_buckets.insert(player.clone()));
        }
    }

    let from_scores: HashSet<P> = store.iter().map(|(player, _)| player.clone()).collect();
    assert_eq!(from_buckets, from_scores);
}
