//! Error type shared by every fallible operation in the crate.

use crate::genes::Probability;
use thiserror::Error;

/// Errors raised by gene sets and the combinator.
///
/// All of these are fail-fast contract violations reported at the call
/// that caused them. Nothing in the crate retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneError {
    /// A required input was absent or inconsistent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Positional access outside `[0, count)`.
    #[error("index {index} out of range for gene set of {count} traits")]
    OutOfRange { index: usize, count: usize },

    /// Keyed access for a key the gene set does not express.
    #[error("trait key {0} not found")]
    KeyNotFound(String),

    /// `numerator * denominator` does not fit in a threshold.
    #[error("chance {0} overflows the threshold range")]
    Overflow(Probability),

    /// The combiner was built without novel-trait support.
    #[error("novel traits are not supported by this combiner")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, GeneError>;
