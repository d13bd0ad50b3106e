//! Error types for board domain parsing and construction.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Positions order tasks within a column and cannot be negative.
    #[error("invalid position {0}, expected a non-negative integer")]
    NegativePosition(i64),

    /// The position does not fit the persisted integer range.
    #[error("position {0} exceeds the maximum storable position")]
    PositionOutOfRange(i64),

    /// Allocating after the given position would overflow.
    #[error("no position is available after {0}")]
    PositionExhausted(i32),
}

/// Error returned while parsing board columns from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);
