//! Error types for the counting engine.

/// Errors raised by the counters and the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A negative or unrepresentable roll count / target sum.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A query outside the configured presentation bounds.
    #[error("{field} must be in 1..={max}, got {value}")]
    OutOfBounds {
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// The recursive counter would recurse deeper than allowed.
    #[error("recursion depth {rolls} exceeds limit {limit}")]
    DepthExceeded { rolls: i32, limit: i32 },

    /// The two counters disagreed.
    #[error("counters disagree: iterative={iterative} recursive={recursive}")]
    Mismatch { iterative: u128, recursive: u128 },
}

pub type DiceResult<T> = Result<T, DiceError>;
