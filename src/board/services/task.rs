//! Task repository service: the only owner of task lifecycle transitions.

use super::{
    error::{TaskServiceError, TaskServiceResult, translate},
    import::{ImportItemError, ImportOutcome},
};
use crate::board::{
    allocator::PositionAllocator,
    domain::{DeleteConfirmation, NewTask, Position, Task, TaskId},
    ports::TaskStore,
    validation::{TaskValidator, TitleRequirement, ValidationError},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Orchestrates validation, position allocation and storage for tasks.
///
/// The service is cheap to clone and safe to share between concurrent
/// request handlers. It holds no locks: two concurrent creates in the same
/// column may be given the same position.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    validator: TaskValidator,
    allocator: PositionAllocator,
}

impl<S, C> Clone for TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            validator: self.validator.clone(),
            allocator: self.allocator,
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with default validation limits.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            validator: TaskValidator::new(),
            allocator: PositionAllocator::new(),
        }
    }

    /// Replaces the payload validator.
    #[must_use]
    pub fn with_validator(mut self, validator: TaskValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns every task ordered by column, position, then id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when storage is unavailable.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        self.store.list().await.map_err(|err| translate("list", err))
    }

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Storage`].
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|err| translate("get", err))?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates a task at the end of its column.
    ///
    /// The column defaults to the backlog and the position is the column's
    /// current maximum plus one, or zero for an empty column. Any position in
    /// the payload is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] without touching storage when
    /// the payload is rejected, or [`TaskServiceError::Storage`].
    #[tracing::instrument(skip(self, payload))]
    pub async fn create(&self, payload: &Value) -> TaskServiceResult<Task> {
        let approved = self.validator.validate(payload, TitleRequirement::Required)?;
        let column = approved.column_or_default();
        let position = self
            .allocator
            .next_position(&*self.store, column)
            .await
            .map_err(|err| translate("create", err))?;
        let draft = approved.into_new_task(position, &*self.clock)?;

        let task = self
            .store
            .insert(draft)
            .await
            .map_err(|err| translate("create", err))?;
        tracing::debug!(task_id = %task.id(), %column, %position, "created task");
        Ok(task)
    }

    /// Replaces the supplied mutable fields of a task.
    ///
    /// Only `title`, `description`, `tags`, `links`, `column` and `position`
    /// are applied; other keys are ignored. `updated_at` is always refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload is rejected
    /// or names no mutable field, [`TaskServiceError::NotFound`] when the
    /// task does not exist, or [`TaskServiceError::Storage`].
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, id: TaskId, payload: &Value) -> TaskServiceResult<Task> {
        let approved = self.validator.validate(payload, TitleRequirement::Optional)?;
        let changes = approved.into_changes(&*self.clock);
        if changes.is_empty() {
            return Err(ValidationError::NoUpdatableFields.into());
        }

        self.store
            .update(id, changes)
            .await
            .map_err(|err| translate("update", err))
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Storage`].
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<DeleteConfirmation> {
        self.store
            .delete(id)
            .await
            .map_err(|err| translate("delete", err))?;
        Ok(DeleteConfirmation::new(id))
    }

    /// Creates many tasks in one storage unit.
    ///
    /// Elements are validated independently; invalid ones are skipped and
    /// reported by index. Valid ones keep their supplied position, or `0`
    /// when none is given, without consulting the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when `payload` is not a list
    /// or exceeds the batch cap, before any element is processed, or
    /// [`TaskServiceError::Storage`] when the batch cannot be written.
    #[tracing::instrument(skip(self, payload))]
    pub async fn import(&self, payload: &Value) -> TaskServiceResult<ImportOutcome> {
        let items = self.validator.validate_import_envelope(payload)?;

        let (accepted, rejected): (Vec<_>, Vec<_>) = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.import_draft(index, item))
            .partition(Result::is_ok);
        let drafts: Vec<NewTask> = accepted.into_iter().filter_map(Result::ok).collect();
        let errors: Vec<ImportItemError> = rejected.into_iter().filter_map(Result::err).collect();

        for skipped in &errors {
            tracing::warn!(index = skipped.index, error = %skipped.error, "skipping invalid import element");
        }

        let imported = self
            .store
            .insert_batch(drafts)
            .await
            .map_err(|err| translate("import", err))?;
        tracing::info!(imported, skipped = errors.len(), "imported tasks");
        Ok(ImportOutcome { imported, errors })
    }

    fn import_draft(&self, index: usize, item: &Value) -> Result<NewTask, ImportItemError> {
        let to_item_error = |error| ImportItemError { index, error };
        let approved = self
            .validator
            .validate(item, TitleRequirement::Required)
            .map_err(to_item_error)?;
        let position = approved.position.unwrap_or(Position::FIRST);
        approved
            .into_new_task(position, &*self.clock)
            .map_err(to_item_error)
    }
}
