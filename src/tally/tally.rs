use crate::error::Result;
use crate::tally::TallyReport;

/// A rule that reduces a poll's ballots to one number.
///
/// Implementations own no state between calls: every call to [`tally`]
/// starts from scratch, so the same ballots always produce the same report.
///
/// [`tally`]: Tally::tally
pub trait Tally {
    /// Stable kebab-case name, matching the config `type` tag.
    fn name(&self) -> &'static str;

    fn tally(&self, ballots: &[f64]) -> Result<TallyReport>;
}
