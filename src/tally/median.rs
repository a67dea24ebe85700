use crate::error::{Result, TallyError};
use crate::tally::{Tally, TallyReport};

/// Middle ballot; the average of the two middle ballots for an even count.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianTally;

pub(crate) fn sorted(ballots: &[f64]) -> Vec<f64> {
    let mut v = ballots.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

impl Tally for MedianTally {
    fn name(&self) -> &'static str {
        "median"
    }

    fn tally(&self, ballots: &[f64]) -> Result<TallyReport> {
        let n = ballots.len();
        if n == 0 {
            return Err(TallyError::InsufficientData {
                submitted: 0,
                required: 1,
            });
        }
        let v = sorted(ballots);
        let mid = n / 2;
        let (estimate, support) = if n % 2 == 1 {
            (v[mid], 1)
        } else {
            ((v[mid - 1] + v[mid]) / 2.0, 2)
        };
        Ok(TallyReport::plain(self.name(), estimate, n, support))
    }
}
