use crate::core::estimators::{Estimator, RunningMean};
use crate::error::{Result, TallyError};
use crate::tally::{Tally, TallyReport};

/// Arithmetic mean of every ballot.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanTally;

impl Tally for MeanTally {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn tally(&self, ballots: &[f64]) -> Result<TallyReport> {
        if ballots.is_empty() {
            return Err(TallyError::InsufficientData {
                submitted: 0,
                required: 1,
            });
        }
        let mut est = RunningMean::new();
        for &b in ballots {
            est.add(b);
        }
        Ok(TallyReport::plain(
            self.name(),
            est.estimation(),
            ballots.len(),
            est.count(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    #[test]
    fn empty_input_is_insufficient() {
        assert!(matches!(
            MeanTally.tally(&[]),
            Err(TallyError::InsufficientData { submitted: 0, .. })
        ));
    }

    #[test]
    fn single_ballot_is_its_own_mean() {
        let r = MeanTally.tally(&[42.0]).unwrap();
        assert_eq!(r.estimate, 42.0);
        assert_eq!(r.support, 1);
        assert!(r.threshold.is_none());
    }

    #[test]
    fn outliers_pull_the_mean() {
        let r = MeanTally.tally(&[18.0, 50.0, 19.0, 52.0, 30.0]).unwrap();
        assert!((r.estimate - 33.8).abs() < 1e-9);
    }

    #[test]
    fn order_does_not_change_the_mean() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut ballots: Vec<f64> = (0..50).map(|_| rng.random_range(0.0..100.0)).collect();
        let before = MeanTally.tally(&ballots).unwrap().estimate;
        ballots.shuffle(&mut rng);
        let after = MeanTally.tally(&ballots).unwrap().estimate;
        assert!((before - after).abs() < 1e-9);
    }
}
