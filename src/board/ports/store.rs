//! Storage port for task persistence.

use crate::board::domain::{Column, NewTask, Position, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Each mutating call is its own atomic unit against storage. Adapters hold
/// no application-level locks beyond what a single statement needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every task in canonical board order.
    async fn list(&self) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns the highest position in the column, or `None` when empty.
    async fn max_position(&self, column: Column) -> TaskStoreResult<Option<Position>>;

    /// Stores a new task and returns it with its assigned identifier.
    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Applies a change set to an existing task and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Task>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;

    /// Stores a batch of tasks as a single unit and returns how many were
    /// written.
    async fn insert_batch(&self, tasks: Vec<NewTask>) -> TaskStoreResult<usize>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A connection could not be obtained.
    #[error("connection error: {0}")]
    Connection(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}
