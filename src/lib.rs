//! Outlier-resistant poll tallying.
//!
//! The central method is the clustered mean: ballots are paired up by
//! absolute distance, closest pairs first, and grown into groups until one
//! group holds a majority (`ceil(n / 2)`) of the ballots. That group's running
//! mean is the estimate. Plain mean, median and trimmed mean are available
//! through the same [`tally::Tally`] interface for comparison.

pub mod core;
pub mod error;
pub mod poll;
pub mod tally;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::{ConfigError, Result, TallyError};
pub use poll::Poll;
pub use tally::{Tally, TallyReport, estimate};
