use thiserror::Error;

/// Terminal failures of a tally. Neither is retryable: the computation is
/// pure, so the same ballots always fail the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TallyError {
    /// Not enough ballots for the chosen method to produce an estimate.
    #[error("insufficient data: {submitted} ballot(s) submitted, at least {required} required")]
    InsufficientData { submitted: usize, required: usize },

    /// Every pairwise distance was consumed without any group reaching the
    /// majority threshold.
    #[error("distance index exhausted: no group reached {threshold} members ({groups} group(s) formed)")]
    Exhausted { threshold: usize, groups: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("poll is closed")]
    PollClosed,
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("line {line}: cannot parse ballot {text:?}")]
    InvalidBallot { line: usize, text: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
