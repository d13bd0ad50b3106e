//! Errors surfaced by board services.

use crate::board::{domain::TaskId, ports::TaskStoreError, validation::ValidationError};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The payload violates a field constraint; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed task does not exist; nothing was changed.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage could not complete the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Storage failure with caller-safe display text.
///
/// `Display` never includes driver or query detail; the underlying
/// [`TaskStoreError`] stays reachable through [`std::error::Error::source`]
/// and is logged when the error is raised.
#[derive(Debug, Clone, Error)]
#[error("storage is unavailable, please retry later")]
pub struct StorageError {
    #[source]
    cause: TaskStoreError,
}

impl StorageError {
    /// Wraps a store failure.
    #[must_use]
    pub const fn new(cause: TaskStoreError) -> Self {
        Self { cause }
    }

    /// Returns the underlying store failure.
    #[must_use]
    pub const fn cause(&self) -> &TaskStoreError {
        &self.cause
    }
}

/// Translates a store failure at the service boundary.
///
/// Missing rows become [`TaskServiceError::NotFound`]; everything else is
/// logged in full and surfaced as a generic [`StorageError`].
pub(super) fn translate(operation: &'static str, err: TaskStoreError) -> TaskServiceError {
    match err {
        TaskStoreError::NotFound(id) => TaskServiceError::NotFound(id),
        other => {
            tracing::error!(operation, error = %other, "task storage operation failed");
            TaskServiceError::Storage(StorageError::new(other))
        }
    }
}
