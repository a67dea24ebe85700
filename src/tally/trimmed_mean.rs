use crate::core::estimators::{Estimator, RunningMean};
use crate::error::{Result, TallyError};
use crate::tally::median::sorted;
use crate::tally::{Tally, TallyReport};

/// Mean after discarding `floor(n * fraction)` ballots from each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedMeanTally {
    fraction: f64,
}

impl TrimmedMeanTally {
    /// `fraction` must lie in `[0, 0.5)` so at least one ballot survives.
    pub fn new(fraction: f64) -> Result<Self> {
        if !(0.0..0.5).contains(&fraction) {
            return Err(TallyError::InvalidParameter(format!(
                "trim_fraction must be in [0, 0.5), got {fraction}"
            )));
        }
        Ok(Self { fraction })
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl Tally for TrimmedMeanTally {
    fn name(&self) -> &'static str {
        "trimmed-mean"
    }

    fn tally(&self, ballots: &[f64]) -> Result<TallyReport> {
        let n = ballots.len();
        if n == 0 {
            return Err(TallyError::InsufficientData {
                submitted: 0,
                required: 1,
            });
        }
        let k = (n as f64 * self.fraction).floor() as usize;
        let v = sorted(ballots);
        let mut est = RunningMean::new();
        for &b in &v[k..n - k] {
            est.add(b);
        }
        Ok(TallyReport::plain(
            self.name(),
            est.estimation(),
            n,
            est.count(),
        ))
    }
}
