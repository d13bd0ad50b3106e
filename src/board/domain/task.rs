//! Task aggregate and the value types that create or change it.

use super::{Column, Link, Position, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
///
/// Serializes to the boundary representation: `tags` and `links` are always
/// arrays and timestamps are RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    tags: Vec<String>,
    links: Vec<Link>,
    column: Column,
    position: Position,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, empty when never set.
    pub description: String,
    /// Persisted tags in insertion order.
    pub tags: Vec<String>,
    /// Persisted links in insertion order.
    pub links: Vec<Link>,
    /// Persisted workflow column.
    pub column: Column,
    /// Persisted position within the column.
    pub position: Position,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            tags: data.tags,
            links: data.links,
            column: data.column,
            position: data.position,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Materializes a freshly stored task from its draft and assigned id.
    #[must_use]
    pub fn from_new(id: TaskId, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            links: draft.links,
            column: draft.column,
            position: draft.position,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the links.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the workflow column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the position within the column.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Key giving the canonical board rendering order.
    ///
    /// Columns compare by their stored name, matching `ORDER BY column_name`
    /// in the database, so `done` sorts before `ready`.
    #[must_use]
    pub const fn board_order(&self) -> (&'static str, Position, TaskId) {
        (self.column.as_str(), self.position, self.id)
    }

    /// Applies a whitelisted change set, leaving absent fields untouched.
    ///
    /// `id` and `created_at` are never modified; `updated_at` always is.
    pub fn apply(&mut self, changes: &TaskChanges) {
        if let Some(title) = &changes.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &changes.description {
            self.description.clone_from(description);
        }
        if let Some(tags) = &changes.tags {
            self.tags.clone_from(tags);
        }
        if let Some(links) = &changes.links {
            self.links.clone_from(links);
        }
        if let Some(column) = changes.column {
            self.column = column;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        self.updated_at = changes.updated_at;
    }
}

/// Sorts tasks into canonical board order: column name, then position, then
/// id.
pub fn sort_for_board(tasks: &mut [Task]) {
    tasks.sort_by_key(Task::board_order);
}

/// Validated task awaiting insertion; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Description, empty when none was given.
    pub description: String,
    /// Tags in caller order.
    pub tags: Vec<String>,
    /// Links in caller order.
    pub links: Vec<Link>,
    /// Target column.
    pub column: Column,
    /// Position within the target column.
    pub position: Position,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Initial mutation timestamp, equal to `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a draft stamped with the current clock time.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        column: Column,
        position: Position,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            links: Vec::new(),
            column,
            position,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the links.
    #[must_use]
    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = links.into_iter().collect();
        self
    }
}

/// Partial update restricted to the mutable task fields.
///
/// Only these six fields can ever reach storage through an update; there is
/// no path from an arbitrary payload key to a storage column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement tags.
    pub tags: Option<Vec<String>>,
    /// Replacement links.
    pub links: Option<Vec<Link>>,
    /// Destination column.
    pub column: Option<Column>,
    /// Replacement position.
    pub position: Option<Position>,
    /// Mutation timestamp written with every update.
    pub updated_at: DateTime<Utc>,
}

impl TaskChanges {
    /// Creates an empty change set stamped with the current clock time.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            title: None,
            description: None,
            tags: None,
            links: None,
            column: None,
            position: None,
            updated_at: clock.utc(),
        }
    }

    /// Returns `true` when no mutable field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.links.is_none()
            && self.column.is_none()
            && self.position.is_none()
    }
}

/// Confirmation returned after a task is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    /// Always `true`; present for the boundary representation.
    pub deleted: bool,
    /// Identifier of the removed task.
    pub id: TaskId,
}

impl DeleteConfirmation {
    /// Confirms removal of the given task.
    #[must_use]
    pub const fn new(id: TaskId) -> Self {
        Self { deleted: true, id }
    }
}
