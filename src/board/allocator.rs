//! Position allocation for newly created tasks.

use crate::board::{
    domain::{Column, Position, TaskDomainError},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Computes insertion positions at the end of a column.
///
/// The read of the current maximum and the later insert are separate
/// storage round trips, so concurrent callers may receive the same
/// position. Positions are advisory sort keys and duplicates are tolerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionAllocator;

impl PositionAllocator {
    /// Creates an allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `max + 1` for the column, or `0` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the store cannot be queried or the
    /// column has no position left.
    pub async fn next_position<S>(&self, store: &S, column: Column) -> TaskStoreResult<Position>
    where
        S: TaskStore + ?Sized,
    {
        let max = store.max_position(column).await?;
        let next = next_after(max).map_err(TaskStoreError::persistence)?;
        tracing::debug!(%column, position = %next, "allocated task position");
        Ok(next)
    }
}

/// Returns the position following `max`, or the first position for `None`.
///
/// # Errors
///
/// Returns [`TaskDomainError::PositionExhausted`] on overflow.
pub fn next_after(max: Option<Position>) -> Result<Position, TaskDomainError> {
    max.map_or(Ok(Position::FIRST), Position::next)
}
