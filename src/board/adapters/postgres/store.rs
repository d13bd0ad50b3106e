//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    pool::{TaskPgPool, get_conn},
    schema::kanban_tasks,
};
use crate::board::{
    domain::{Column, Link, NewTask, PersistedTaskData, Position, Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use serde_json::Value;

/// `PostgreSQL`-backed task store.
///
/// All Diesel calls run on the blocking thread pool via
/// [`tokio::task::spawn_blocking`]. Every mutating call runs in its own
/// transaction and is rolled back if any statement in it fails.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &TaskPgPool {
        &self.pool
    }

    async fn run_blocking<F, T>(&self, operation: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = get_conn(&pool)?;
            operation(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

impl From<diesel::result::Error> for TaskStoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            kanban_tasks::table
                .order((
                    kanban_tasks::column_name.asc(),
                    kanban_tasks::position.asc(),
                    kanban_tasks::id.asc(),
                ))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            kanban_tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?
                .map(row_to_task)
                .transpose()
        })
        .await
    }

    async fn max_position(&self, column: Column) -> TaskStoreResult<Option<Position>> {
        self.run_blocking(move |connection| {
            let current: Option<i32> = kanban_tasks::table
                .filter(kanban_tasks::column_name.eq(column.as_str()))
                .select(max(kanban_tasks::position))
                .first(connection)?;
            current
                .map(|value| Position::new(i64::from(value)))
                .transpose()
                .map_err(TaskStoreError::persistence)
        })
        .await
    }

    async fn insert(&self, task: NewTask) -> TaskStoreResult<Task> {
        let new_row = to_new_row(task)?;
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let row = diesel::insert_into(kanban_tasks::table)
                    .values(&new_row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                row_to_task(row)
            })
        })
        .await
    }

    async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Task> {
        let changeset = to_changeset(changes)?;
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let row = diesel::update(kanban_tasks::table.find(id.value()))
                    .set(&changeset)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)
                    .optional()?
                    .ok_or(TaskStoreError::NotFound(id))?;
                row_to_task(row)
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let deleted =
                    diesel::delete(kanban_tasks::table.find(id.value())).execute(tx)?;
                if deleted == 0 {
                    return Err(TaskStoreError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn insert_batch(&self, tasks: Vec<NewTask>) -> TaskStoreResult<usize> {
        if tasks.is_empty() {
            return Ok(0);
        }
        let rows = tasks
            .into_iter()
            .map(to_new_row)
            .collect::<TaskStoreResult<Vec<_>>>()?;
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskStoreError, _>(|tx| {
                let inserted = diesel::insert_into(kanban_tasks::table)
                    .values(&rows)
                    .execute(tx)?;
                Ok(inserted)
            })
        })
        .await
    }
}

fn links_to_value(links: &[Link]) -> TaskStoreResult<Value> {
    serde_json::to_value(links).map_err(TaskStoreError::persistence)
}

fn to_new_row(task: NewTask) -> TaskStoreResult<NewTaskRow> {
    let links = links_to_value(&task.links)?;
    Ok(NewTaskRow {
        title: task.title,
        description: Some(task.description),
        tags: Some(task.tags),
        links: Some(links),
        column_name: task.column.as_str().to_owned(),
        position: task.position.value(),
        created_at: task.created_at,
        updated_at: task.updated_at,
    })
}

fn to_changeset(changes: TaskChanges) -> TaskStoreResult<TaskChangeset> {
    let links = changes
        .links
        .as_deref()
        .map(links_to_value)
        .transpose()?;
    Ok(TaskChangeset {
        title: changes.title,
        description: changes.description,
        tags: changes.tags,
        links,
        column_name: changes.column.map(|column| column.as_str().to_owned()),
        position: changes.position.map(Position::value),
        updated_at: changes.updated_at,
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        tags,
        links: persisted_links,
        column_name,
        position: persisted_position,
        created_at,
        updated_at,
    } = row;

    let links = persisted_links
        .map(serde_json::from_value::<Vec<Link>>)
        .transpose()
        .map_err(TaskStoreError::persistence)?
        .unwrap_or_default();
    let column = Column::try_from(column_name.as_str()).map_err(TaskStoreError::persistence)?;
    let position =
        Position::new(i64::from(persisted_position)).map_err(TaskStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description: description.unwrap_or_default(),
        tags: tags.unwrap_or_default(),
        links,
        column,
        position,
        created_at,
        updated_at,
    }))
}
