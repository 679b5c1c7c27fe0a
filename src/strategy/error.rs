use thiserror::Error;

use crate::strategy::kind::StrategyKind;

/// Reasons a grouping call is aborted. No partial result is ever returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupingError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Wrong number of inputs for the strategy
    #[error("{strategy}: bad package count: {reason}")]
    Precondition {
        strategy: StrategyKind,
        reason: String,
    },

    /// An artifact that must follow the convention's naming does not
    #[error("{artifact}: does not match {expected}")]
    Malformed { artifact: String, expected: String },

    /// Two artifacts claim a key that has to be unique
    #[error("file clash for {key}: {first}, {second}")]
    Clash {
        key: String,
        first: String,
        second: String,
    },

    /// A group cannot be completed
    #[error("{key}: {reason}")]
    Incomplete { key: String, reason: String },

    /// Matched artifacts come from different pools
    #[error(
        "invalid mixture of package pools: {first} ({first_pool}), {second} ({second_pool})"
    )]
    CrossPool {
        first: String,
        first_pool: String,
        second: String,
        second_pool: String,
    },
}
