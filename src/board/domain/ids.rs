//! Identifier and ordering scalar types for the board domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a task.
///
/// Identifiers are issued once by the store and never reused or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a storage identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordering key of a task within its column.
///
/// Positions are advisory: they need not be contiguous and two tasks may
/// share one, in which case the task id breaks the tie.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct Position(i32);

impl Position {
    /// Position of the first task placed in an empty column.
    pub const FIRST: Self = Self(0);

    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativePosition`] for negative values and
    /// [`TaskDomainError::PositionOutOfRange`] for values the schema cannot
    /// hold.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value < 0 {
            return Err(TaskDomainError::NegativePosition(value));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| TaskDomainError::PositionOutOfRange(value))
    }

    /// Returns the position immediately after this one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PositionExhausted`] on overflow.
    pub const fn next(self) -> Result<Self, TaskDomainError> {
        match self.0.checked_add(1) {
            Some(value) => Ok(Self(value)),
            None => Err(TaskDomainError::PositionExhausted(self.0)),
        }
    }

    /// Returns the persisted integer value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
