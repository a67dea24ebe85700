mod estimator;
mod running_mean;

pub use estimator::Estimator;
pub use running_mean::RunningMean;
