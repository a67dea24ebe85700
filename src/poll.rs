use crate::error::{Result, TallyError};
use crate::tally::TallyReport;
use crate::ui::types::build::build_tally;
use crate::ui::types::choices::TallyChoice;
use crate::ui::types::config::PollConfig;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    Open,
    Closed(TallyReport),
}

/// Collects ballots and tallies them once when closed.
///
/// Votes are only accepted while the poll is open. Closing runs the
/// configured tally; if that fails the poll stays open so more ballots can
/// be added before trying again.
#[derive(Debug, Clone)]
pub struct Poll {
    choice: TallyChoice,
    ballots: Vec<f64>,
    state: PollState,
}

impl Poll {
    pub fn new(choice: TallyChoice) -> Self {
        Self {
            choice,
            ballots: Vec::new(),
            state: PollState::Open,
        }
    }

    pub fn vote(&mut self, ballot: f64) -> Result<()> {
        match self.state {
            PollState::Open => {
                self.ballots.push(ballot);
                Ok(())
            }
            PollState::Closed(_) => Err(TallyError::PollClosed),
        }
    }

    pub fn close(&mut self) -> Result<&TallyReport> {
        if let PollState::Open = self.state {
            let tally = build_tally(&self.choice)?;
            let report = tally.tally(&self.ballots)?;
            debug!(method = report.method, ballots = report.ballots, "poll closed");
            self.state = PollState::Closed(report);
        }
        match &self.state {
            PollState::Closed(report) => Ok(report),
            PollState::Open => unreachable!("poll is closed above"),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PollState::Open)
    }

    pub fn result(&self) -> Option<&TallyReport> {
        match &self.state {
            PollState::Closed(report) => Some(report),
            PollState::Open => None,
        }
    }

    pub fn ballots(&self) -> &[f64] {
        &self.ballots
    }

    pub fn choice(&self) -> &TallyChoice {
        &self.choice
    }
}

impl From<PollConfig> for Poll {
    fn from(config: PollConfig) -> Self {
        Self {
            choice: config.tally,
            ballots: config.ballots,
            state: PollState::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_votes_until_closed() {
        let mut poll = Poll::new(TallyChoice::ClusteredMean);
        for b in [18.0, 50.0, 19.0, 52.0, 30.0] {
            poll.vote(b).unwrap();
        }
        assert!(poll.is_open());
        assert!(poll.result().is_none());

        let estimate = poll.close().unwrap().estimate;
        assert_eq!(estimate, (18.5 * 2.0 + 30.0) / 3.0);
        assert!(!poll.is_open());
        assert_eq!(poll.vote(1.0), Err(TallyError::PollClosed));
        assert_eq!(poll.ballots().len(), 5);
    }

    #[test]
    fn closing_twice_returns_the_same_report() {
        let mut poll = Poll::new(TallyChoice::Median);
        poll.vote(3.0).unwrap();
        poll.vote(1.0).unwrap();
        let first = poll.close().unwrap().clone();
        let second = poll.close().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(poll.result(), Some(&first));
    }

    #[test]
    fn failed_tally_keeps_the_poll_open() {
        let mut poll = Poll::new(TallyChoice::ClusteredMean);
        poll.vote(10.0).unwrap();
        assert!(matches!(
            poll.close(),
            Err(TallyError::InsufficientData { submitted: 1, .. })
        ));
        assert!(poll.is_open());

        poll.vote(20.0).unwrap();
        assert_eq!(poll.close().unwrap().estimate, 15.0);
    }

    #[test]
    fn builds_from_config() {
        let config = PollConfig {
            tally: TallyChoice::Mean,
            ballots: vec![1.0, 2.0, 3.0],
        };
        let mut poll = Poll::from(config);
        assert_eq!(poll.choice(), &TallyChoice::Mean);
        assert_eq!(poll.close().unwrap().estimate, 2.0);
    }
}
