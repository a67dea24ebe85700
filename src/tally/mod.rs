mod clustered_mean;
mod mean;
mod median;
mod report;
mod tally;
mod trimmed_mean;

pub use clustered_mean::{ClusteredMean, ClusteredMeanTally, Majority, estimate, majority_threshold};
pub use mean::MeanTally;
pub use median::MedianTally;
pub use report::TallyReport;
pub use tally::Tally;
pub use trimmed_mean::TrimmedMeanTally;
