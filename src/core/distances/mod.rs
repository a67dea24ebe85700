mod distance_index;

pub use distance_index::{BallotPair, DistanceBatch, DistanceIndex};
