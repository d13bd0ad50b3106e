//! In-memory task store for tests and embedding.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Column, NewTask, Position, Task, TaskChanges, TaskId, sort_for_board},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Identifiers start at 1 and increase monotonically; removed identifiers
/// are never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskState {
    fn insert(&mut self, draft: NewTask) -> TaskStoreResult<Task> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            TaskStoreError::persistence(std::io::Error::other("task identifiers exhausted"))
        })?;
        self.last_id = next;
        let task = Task::from_new(TaskId::new(next), draft);
        self.tasks.insert(task.id(), task.clone());
        Ok(task)
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        sort_for_board(&mut tasks);
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn max_position(&self, column: Column) -> TaskStoreResult<Option<Position>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.column() == column)
            .map(Task::position)
            .max())
    }

    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        state.insert(task)
    }

    async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply(&changes);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(id))
    }

    async fn insert_batch(&self, tasks: Vec<NewTask>) -> TaskStoreResult<usize> {
        let mut state = self.write()?;
        let count = tasks.len();
        for draft in tasks {
            state.insert(draft)?;
        }
        Ok(count)
    }
}
