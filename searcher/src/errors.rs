use thiserror::Error;

/// Error produced when a search cannot reach a decision.
///
/// An unreachable goal is not an error, it is reported through
/// a [crate::SearchReport] without a solution.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Attempted to pop from an empty frontier")]
    EmptyFrontier,

    #[error("Malformed problem: {0}")]
    MalformedProblem(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
