mod tally;

pub use tally::build_tally;
