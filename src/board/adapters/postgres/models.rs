//! Diesel row models for task persistence.

use super::schema::kanban_tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = kanban_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Description, `None` for legacy rows.
    pub description: Option<String>,
    /// Tags, `None` for legacy rows.
    pub tags: Option<Vec<String>>,
    /// Links JSON array, `None` for legacy rows.
    pub links: Option<Value>,
    /// Column name.
    pub column_name: String,
    /// Position within the column.
    pub position: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = kanban_tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Links JSON array.
    pub links: Option<Value>,
    /// Column name.
    pub column_name: String,
    /// Position within the column.
    pub position: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset for partial task updates.
///
/// `None` fields are left out of the generated `SET` clause, so the column
/// list is fixed at compile time and never derived from payload keys.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = kanban_tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
    /// Replacement links JSON array.
    pub links: Option<Value>,
    /// Destination column name.
    pub column_name: Option<String>,
    /// Replacement position.
    pub position: Option<i32>,
    /// Mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
