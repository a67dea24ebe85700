use crate::core::estimators::Estimator;
use serde::Serialize;

/// Streaming mean that keeps only `(mean, count)`.
///
/// Each observation updates the mean in place with
/// `mean = (mean * count + v) / (count + 1)`; individual values are not kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct RunningMean {
    mean: f64,
    count: usize,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the midpoint of two observations.
    pub fn of_pair(a: f64, b: f64) -> Self {
        Self {
            mean: (a + b) / 2.0,
            count: 2,
        }
    }
}

impl Estimator for RunningMean {
    #[inline]
    fn add(&mut self, v: f64) {
        let n = self.count as f64;
        self.mean = (self.mean * n + v) / (n + 1.0);
        self.count += 1;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.count > 0 { self.mean } else { f64::NAN }
    }

    #[inline]
    fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_estimate_is_nan() {
        let m = RunningMean::new();
        assert_eq!(m.count(), 0);
        assert!(m.estimation().is_nan());
    }

    #[test]
    fn pair_starts_at_midpoint() {
        let m = RunningMean::of_pair(18.0, 19.0);
        assert_eq!(m.count(), 2);
        assert_eq!(m.estimation(), 18.5);
    }

    #[test]
    fn incremental_update_matches_closed_form() {
        let mut m = RunningMean::of_pair(18.0, 19.0);
        m.add(30.0);
        assert_eq!(m.count(), 3);
        assert_eq!(m.estimation(), (18.5 * 2.0 + 30.0) / 3.0);
        assert!(approx_eq(m.estimation(), 67.0 / 3.0, EPS));
    }

    #[test]
    fn tracks_plain_mean_from_empty() {
        let mut m = RunningMean::new();
        for v in [1.0, 2.0, 3.0, 4.0] {
            m.add(v);
        }
        assert_eq!(m.count(), 4);
        assert!(approx_eq(m.estimation(), 2.5, EPS));
    }
}
