use crate::core::ballot::{Ballot, Distance};
use crate::core::distances::DistanceIndex;
use crate::core::groups::{Group, GroupTracker};
use crate::error::{Result, TallyError};
use crate::tally::{Tally, TallyReport};
use tracing::{debug, info, trace, warn};

/// Group size needed to win: `ceil(n / 2)`.
#[inline]
pub fn majority_threshold(n: usize) -> usize {
    n.div_ceil(2)
}

/// Clustered mean of `ballots`, in submission order.
///
/// ```
/// let estimate = clustered_mean::estimate(&[18.0, 50.0, 19.0, 52.0, 30.0]).unwrap();
/// assert_eq!(estimate, (18.5 * 2.0 + 30.0) / 3.0);
/// ```
pub fn estimate(ballots: &[f64]) -> Result<f64> {
    let mut clustered = ClusteredMean::new();
    for &b in ballots {
        clustered.vote(b);
    }
    Ok(clustered.tally()?.estimate)
}

/// Winning group at the moment the tally stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Majority {
    pub group: Group,
    pub threshold: usize,
    pub distance: Distance,
    /// Distance batches consumed, the winning one included.
    pub batches: usize,
    pub estimate: f64,
}

/// Incremental clustered-mean tally over one set of ballots.
///
/// Each vote is recorded against every earlier ballot in the distance index.
/// [`tally`](ClusteredMean::tally) then drains the index smallest distance
/// first, creating a group when neither ballot of a pair is grouped and
/// otherwise extending each side's groups with the other ballot, until some
/// group holds a majority of the ballots.
#[derive(Debug, Default, Clone)]
pub struct ClusteredMean {
    ballots: Vec<Ballot>,
    index: DistanceIndex,
}

impl ClusteredMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vote(&mut self, value: f64) {
        let ballot = Ballot::new(value);
        self.index.record(ballot, &self.ballots);
        self.ballots.push(ballot);
    }

    pub fn len(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }

    pub fn tally(self) -> Result<Majority> {
        let n = self.ballots.len();
        if n < 2 {
            return Err(TallyError::InsufficientData {
                submitted: n,
                required: 2,
            });
        }

        let threshold = majority_threshold(n);
        let mut index = self.index;
        let mut tracker = GroupTracker::new();
        let mut batches = 0;

        while let Some(batch) = index.pop_smallest() {
            batches += 1;
            trace!(
                distance = batch.distance.value(),
                pairs = batch.pairs.len(),
                "distance batch"
            );
            for &(a, b) in &batch.pairs {
                if let Some(group) = merge_pair(&mut tracker, a, b, threshold) {
                    info!(
                        group = %group.id,
                        members = group.count(),
                        threshold,
                        estimate = group.mean(),
                        "majority group found"
                    );
                    return Ok(Majority {
                        group,
                        threshold,
                        distance: batch.distance,
                        batches,
                        estimate: group.mean(),
                    });
                }
            }
        }

        warn!(threshold, groups = tracker.len(), "distance index exhausted");
        Err(TallyError::Exhausted {
            threshold,
            groups: tracker.len(),
        })
    }
}

/// Applies one pair to the tracker and returns the first group it pushes to
/// the threshold, if any.
fn merge_pair(tracker: &mut GroupTracker, a: Ballot, b: Ballot, threshold: usize) -> Option<Group> {
    if !tracker.is_grouped(a) && !tracker.is_grouped(b) {
        let id = tracker.create_group(a, b);
        debug!(group = %id, %a, %b, "group created");
        return if tracker.reached_majority(id, threshold) {
            tracker.group(id).copied()
        } else {
            None
        };
    }

    let groups_a = tracker.membership_of(a).to_vec();
    let groups_b = tracker.membership_of(b).to_vec();
    let extensions = groups_a
        .iter()
        .filter(|g| !groups_b.contains(g))
        .map(|&g| (g, b))
        .chain(
            groups_b
                .iter()
                .filter(|g| !groups_a.contains(g))
                .map(|&g| (g, a)),
        );

    for (id, ballot) in extensions {
        let Some(group) = tracker.extend_group(id, ballot).copied() else {
            continue;
        };
        debug!(group = %id, %ballot, members = group.count(), mean = group.mean(), "group extended");
        if tracker.reached_majority(id, threshold) {
            return Some(group);
        }
    }
    None
}

/// [`Tally`] adapter over [`ClusteredMean`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusteredMeanTally;

impl Tally for ClusteredMeanTally {
    fn name(&self) -> &'static str {
        "clustered-mean"
    }

    fn tally(&self, ballots: &[f64]) -> Result<TallyReport> {
        let mut clustered = ClusteredMean::new();
        for &b in ballots {
            clustered.vote(b);
        }
        let majority = clustered.tally()?;
        Ok(TallyReport {
            method: self.name(),
            estimate: majority.estimate,
            ballots: ballots.len(),
            support: majority.group.count(),
            threshold: Some(majority.threshold),
            group: Some(majority.group.id),
            distance: Some(majority.distance.value()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn run(values: &[f64]) -> Result<Majority> {
        let mut c = ClusteredMean::new();
        for &v in values {
            c.vote(v);
        }
        c.tally()
    }

    fn random_ballots(rng: &mut StdRng, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.random_range(-100.0..100.0)).collect()
    }

    #[test]
    fn threshold_is_ceiling_of_half() {
        assert_eq!(majority_threshold(1), 1);
        assert_eq!(majority_threshold(2), 1);
        assert_eq!(majority_threshold(4), 2);
        assert_eq!(majority_threshold(5), 3);
        assert_eq!(majority_threshold(6), 3);
    }

    #[test]
    fn fewer_than_two_ballots_is_insufficient() {
        assert_eq!(
            estimate(&[]),
            Err(TallyError::InsufficientData {
                submitted: 0,
                required: 2
            })
        );
        assert_eq!(
            estimate(&[42.0]),
            Err(TallyError::InsufficientData {
                submitted: 1,
                required: 2
            })
        );
    }

    #[test]
    fn two_ballots_average_exactly() {
        assert_eq!(estimate(&[10.0, 20.0]), Ok(15.0));
    }

    #[test]
    fn tight_cluster_wins_worked_example() {
        let m = run(&[18.0, 19.0, 50.0, 52.0, 30.0]).unwrap();
        assert_eq!(m.threshold, 3);
        assert_eq!(m.group.id.get(), 1);
        assert_eq!(m.group.count(), 3);
        assert_eq!(m.distance.value(), 11.0);
        assert_eq!(m.batches, 3);
        assert_eq!(m.estimate, (18.5 * 2.0 + 30.0) / 3.0);
        assert!(approx_eq(m.estimate, 22.333_333_333, EPS));
    }

    #[test]
    fn submission_order_of_the_worked_example_does_not_matter_here() {
        let a = estimate(&[18.0, 50.0, 19.0, 52.0, 30.0]).unwrap();
        let b = estimate(&[18.0, 19.0, 50.0, 52.0, 30.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn all_equal_ballots_return_the_value() {
        assert_eq!(estimate(&[5.0, 5.0, 5.0, 5.0]), Ok(5.0));
    }

    #[test]
    fn equal_ballots_collapse_and_can_exhaust() {
        // Five copies are one ballot: the only group never grows past 2.
        assert_eq!(
            estimate(&[7.0; 5]),
            Err(TallyError::Exhausted {
                threshold: 3,
                groups: 1
            })
        );
    }

    #[test]
    fn ballot_joins_two_groups_and_second_extension_wins() {
        // d=1 forms {0,1} and {10,11}; at d=4.5 the pair (1, 5.5) extends #1,
        // then (10, 5.5) extends #2 with 5.5 and #1 with 10.
        let m = run(&[0.0, 1.0, 10.0, 11.0, 5.5, 100.0, 200.0]).unwrap();
        assert_eq!(m.threshold, 4);
        assert_eq!(m.group.id.get(), 1);
        assert_eq!(m.group.count(), 4);
        assert_eq!(m.distance.value(), 4.5);
        assert!(approx_eq(m.estimate, (0.0 + 1.0 + 5.5 + 10.0) / 4.0, EPS));
    }

    #[test]
    fn outliers_do_not_drag_the_estimate() {
        let e = estimate(&[49.0, 50.0, 51.0, 1000.0, -1000.0]).unwrap();
        assert!(approx_eq(e, 50.0, EPS));
    }

    #[test]
    fn winner_holds_exactly_the_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..40 {
            let ballots = random_ballots(&mut rng, n);
            let m = run(&ballots).unwrap();
            assert!(m.group.count() >= majority_threshold(n));
            assert_eq!(m.group.count(), majority_threshold(n).max(2));
        }
    }

    #[test]
    fn repeated_tallies_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [2, 3, 10, 25] {
            let ballots = random_ballots(&mut rng, n);
            assert_eq!(estimate(&ballots), estimate(&ballots));
        }
    }

    #[test]
    fn estimate_stays_within_ballot_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 2..30 {
            let ballots = random_ballots(&mut rng, n);
            let lo = ballots.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = ballots.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let e = estimate(&ballots).unwrap();
            assert!(e >= lo - EPS && e <= hi + EPS, "{e} outside [{lo}, {hi}]");
        }
    }

    #[test]
    fn tally_adapter_reports_cluster_details() {
        let r = ClusteredMeanTally
            .tally(&[18.0, 50.0, 19.0, 52.0, 30.0])
            .unwrap();
        assert_eq!(r.method, "clustered-mean");
        assert_eq!(r.ballots, 5);
        assert_eq!(r.support, 3);
        assert_eq!(r.threshold, Some(3));
        assert_eq!(r.group.map(|g| g.get()), Some(1));
        assert_eq!(r.distance, Some(11.0));
    }
}
