use crate::core::ballot::{Ballot, Distance};
use std::collections::BTreeMap;

/// An unordered pair of ballots, stored as `(earlier, later)` submission order.
pub type BallotPair = (Ballot, Ballot);

/// Every pair filed under one distance value, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceBatch {
    pub distance: Distance,
    pub pairs: Vec<BallotPair>,
}

/// Two-level index of pairwise ballot distances: distance → pairs.
///
/// The ordered map plays the role of a min-priority queue keyed by distance.
/// Equal distances land in the same bucket, so a single pop yields all of
/// them and no bucket is ever visited twice.
#[derive(Debug, Default, Clone)]
pub struct DistanceIndex {
    buckets: BTreeMap<Distance, Vec<BallotPair>>,
    pairs: usize,
}

impl DistanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `(p, ballot)` under `|ballot - p|` for every prior ballot `p`.
    pub fn record(&mut self, ballot: Ballot, priors: &[Ballot]) {
        for &prior in priors {
            self.buckets
                .entry(ballot.distance_to(prior))
                .or_default()
                .push((prior, ballot));
        }
        self.pairs += priors.len();
    }

    /// Removes the smallest remaining distance with all of its pairs.
    pub fn pop_smallest(&mut self) -> Option<DistanceBatch> {
        let (distance, pairs) = self.buckets.pop_first()?;
        self.pairs -= pairs.len();
        Some(DistanceBatch { distance, pairs })
    }

    /// Smallest remaining distance without removing it.
    pub fn peek_smallest(&self) -> Option<Distance> {
        self.buckets.keys().next().copied()
    }

    /// Number of distinct distance values left.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of ballot pairs left across all buckets.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }
}
