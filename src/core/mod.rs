pub mod ballot;
pub mod distances;
pub mod estimators;
pub mod groups;

pub use ballot::{Ballot, Distance};
