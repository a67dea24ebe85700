use crate::core::ballot::Ballot;
use crate::core::estimators::{Estimator, RunningMean};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Group identifiers are handed out in creation order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(usize);

impl GroupId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A cluster of ballots, represented only by its running statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Group {
    pub id: GroupId,
    stats: RunningMean,
}

impl Group {
    pub fn mean(&self) -> f64 {
        self.stats.estimation()
    }

    pub fn count(&self) -> usize {
        self.stats.count()
    }
}

/// Owns every group formed during one tally and the ballot → groups map.
///
/// Groups are never merged or removed. A ballot may belong to several groups
/// at once; its membership list keeps the order in which it joined them.
#[derive(Debug, Default, Clone)]
pub struct GroupTracker {
    groups: Vec<Group>,
    membership: HashMap<Ballot, Vec<GroupId>>,
}

impl GroupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_group(&mut self, a: Ballot, b: Ballot) -> GroupId {
        let id = GroupId(self.groups.len() + 1);
        self.groups.push(Group {
            id,
            stats: RunningMean::of_pair(a.value(), b.value()),
        });
        self.join(a, id);
        self.join(b, id);
        id
    }

    /// Folds `ballot` into the group's running mean. Returns `None` for an id
    /// this tracker never issued.
    pub fn extend_group(&mut self, id: GroupId, ballot: Ballot) -> Option<&Group> {
        let idx = id.0.checked_sub(1)?;
        self.groups.get_mut(idx)?.stats.add(ballot.value());
        self.join(ballot, id);
        self.groups.get(idx)
    }

    pub fn membership_of(&self, ballot: Ballot) -> &[GroupId] {
        self.membership
            .get(&ballot)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_grouped(&self, ballot: Ballot) -> bool {
        !self.membership_of(ballot).is_empty()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0.checked_sub(1)?)
    }

    pub fn reached_majority(&self, id: GroupId, threshold: usize) -> bool {
        self.group(id).is_some_and(|g| g.count() >= threshold)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn join(&mut self, ballot: Ballot, id: GroupId) {
        let ids = self.membership.entry(ballot).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
}
