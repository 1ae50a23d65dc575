//! Dual-index ranking store
//!
//! Scores are kept twice: a direct `player -> score` map and an ordered
//! `score -> players` map walked from the highest score down. Both indices are
//! changed together inside `submit_score`, so top-N and rank queries never
//! need to sort.

use crate::types::{PlayerId, PlayerStanding, Score, ScoreUpdate};
use std::cmp::Reverse;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// Leaderboard over players `P` holding scores `S`
///
/// Players tied on a score are kept in an unordered set, so their relative
/// order in [`RankingStore::top_n`] and [`RankingStore::buckets`] is
/// unspecified and may change between calls that mutate the store.
#[derive(Debug, Clone)]
pub struct RankingStore<P, S> {
    /// Current score of every known player
    scores: HashMap<P, S>,
    /// Players grouped by score, highest score first. Never holds an empty set.
    buckets: BTreeMap<Reverse<S>, HashSet<P>>,
}

impl<P, S> Default for RankingStore<P, S> {
    fn default() -> Self {
        Self {
            scores: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }
}

impl<P, S> RankingStore<P, S>
where
    P: Hash + Eq + Clone,
    S: Ord + Clone,
{
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a `player -> score` snapshot
    pub fn from_scores(scores: HashMap<P, S>) -> Self {
        let mut buckets: BTreeMap<Reverse<S>, HashSet<P>> = BTreeMap::new();
        for (player, score) in &scores {
            buckets
                .entry(Reverse(score.clone()))
                .or_default()
                .insert(player.clone());
        }
        Self { scores, buckets }
    }

    /// Record `score` as the player's current score
    ///
    /// A known player is moved out of its old bucket before joining the new
    /// one; an old bucket left empty is dropped.
    pub fn submit_score(&mut self, player: P, score: S) -> ScoreUpdate<S> {
        let update = match self.scores.insert(player.clone(), score.clone()) {
            Some(previous) if previous == score => return ScoreUpdate::Unchanged,
            Some(previous) => {
                self.detach(&player, &previous);
                ScoreUpdate::Updated { previous }
            }
            None => ScoreUpdate::Inserted,
        };

        self.buckets
            .entry(Reverse(score))
            .or_default()
            .insert(player);

        update
    }

    /// Remove `player` from the bucket for `score`, dropping the bucket if it empties
    fn detach(&mut self, player: &P, score: &S) {
        if let Entry::Occupied(mut bucket) = self.buckets.entry(Reverse(score.clone())) {
            bucket.get_mut().remove(player);
            if bucket.get().is_empty() {
                bucket.remove();
            }
        }
    }

    /// The first `n` players in descending score order
    ///
    /// Only the buckets needed to produce `n` entries are visited.
    pub fn top_n(&self, n: usize) -> Vec<(P, S)> {
        self.buckets
            .iter()
            .flat_map(|(Reverse(score), players)| {
                players
                    .iter()
                    .map(move |player| (player.clone(), score.clone()))
            })
            .take(n)
            .collect()
    }

    /// 1-based competition rank of `player`, or `None` if it has no score
    ///
    /// Equals one plus the number of players with a strictly greater score,
    /// so tied players share a rank and the following rank is skipped.
    pub fn rank_of(&self, player: &P) -> Option<usize> {
        let score = self.scores.get(player)?;

        // Keys below Reverse(score) are exactly the higher scores.
        let ahead: usize = self
            .buckets
            .range(..Reverse(score.clone()))
            .map(|(_, players)| players.len())
            .sum();

        Some(ahead + 1)
    }

    /// Current score of `player`
    pub fn score_of(&self, player: &P) -> Option<&S> {
        self.scores.get(player)
    }

    pub fn contains(&self, player: &P) -> bool {
        self.scores.contains_key(player)
    }

    /// Number of ranked players
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of distinct scores currently held
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Score buckets from the highest score down
    pub fn buckets(&self) -> impl Iterator<Item = (&S, &HashSet<P>)> + '_ {
        self.buckets
            .iter()
            .map(|(Reverse(score), players)| (score, players))
    }

    /// Every `(player, score)` pair in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &S)> + '_ {
        self.scores.iter()
    }

    /// Copy of the `player -> score` index; enough to rebuild the store
    pub fn snapshot(&self) -> HashMap<P, S> {
        self.scores.clone()
    }
}

impl RankingStore<PlayerId, Score> {
    /// Score and rank of `player_id` in one lookup
    pub fn standing(&self, player_id: PlayerId) -> Option<PlayerStanding> {
        let score = *self.score_of(&player_id)?;
        let rank = self.rank_of(&player_id)?;
        Some(PlayerStanding {
            player_id,
            score,
            rank,
        })
    }
}

impl<P, S> Extend<(P, S)> for RankingStore<P, S>
where
    P: Hash + Eq + Clone,
    S: Ord + Clone,
{
    fn extend<I: IntoIterator<Item = (P, S)>>(&mut self, iter: I) {
        for (player, score) in iter {
            self.submit_score(player, score);
        }
    }
}

impl<P, S> FromIterator<(P, S)> for RankingStore<P, S>
where
    P: Hash + Eq + Clone,
    S: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (P, S)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
