use crate::core::groups::GroupId;
use serde::Serialize;

/// Result of tallying a set of ballots with one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyReport {
    pub method: &'static str,
    pub estimate: f64,
    /// Number of ballots tallied.
    pub ballots: usize,
    /// How many ballots back the estimate: the winning group's size for the
    /// clustered mean, the ballots actually averaged otherwise.
    pub support: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
    /// Distance whose batch produced the winning group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl TallyReport {
    pub(crate) fn plain(method: &'static str, estimate: f64, ballots: usize, support: usize) -> Self {
        Self {
            method,
            estimate,
            ballots,
            support,
            threshold: None,
            group: None,
            distance: None,
        }
    }
}
