mod group_tracker;

pub use group_tracker::{Group, GroupId, GroupTracker};
