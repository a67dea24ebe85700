use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A single numeric vote.
///
/// Ballots are identified by value: two submissions of `30.0` are the same
/// ballot as far as group membership is concerned. `-0.0` is folded into
/// `0.0` so the two zeros share an identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ballot(f64);

impl Ballot {
    #[inline]
    pub fn new(value: f64) -> Self {
        if value == 0.0 { Ballot(0.0) } else { Ballot(value) }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute difference between two ballots.
    #[inline]
    pub fn distance_to(self, other: Ballot) -> Distance {
        Distance::new((self.0 - other.0).abs())
    }
}

impl From<f64> for Ballot {
    fn from(value: f64) -> Self {
        Ballot::new(value)
    }
}

impl PartialEq for Ballot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ballot {}

impl PartialOrd for Ballot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ballot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Ballot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Display for Ballot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative gap between two ballots, totally ordered so it can key an
/// ordered map.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    #[inline]
    pub fn new(value: f64) -> Self {
        if value == 0.0 { Distance(0.0) } else { Distance(value) }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
