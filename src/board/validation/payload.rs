//! Typed result of a successful payload validation.

use super::ValidationError;
use crate::board::domain::{Column, Link, NewTask, Position, TaskChanges};
use mockable::Clock;

/// Whether a payload must carry a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRequirement {
    /// Creation and import: the title must be present.
    Required,
    /// Partial update: the title may be omitted.
    Optional,
}

/// Validator-approved task fields.
///
/// Each field is `None` when the payload omitted it (or sent `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPayload {
    /// Approved title.
    pub title: Option<String>,
    /// Approved description.
    pub description: Option<String>,
    /// Approved tags.
    pub tags: Option<Vec<String>>,
    /// Approved links.
    pub links: Option<Vec<Link>>,
    /// Approved column.
    pub column: Option<Column>,
    /// Approved position.
    pub position: Option<Position>,
}

impl TaskPayload {
    /// Returns the target column, defaulting to the backlog.
    #[must_use]
    pub fn column_or_default(&self) -> Column {
        self.column.unwrap_or_default()
    }

    /// Builds an insertion draft at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingTitle`] if the payload was
    /// validated without a title.
    pub fn into_new_task(
        self,
        position: Position,
        clock: &impl Clock,
    ) -> Result<NewTask, ValidationError> {
        let column = self.column_or_default();
        let title = self.title.ok_or(ValidationError::MissingTitle)?;
        Ok(NewTask::new(title, column, position, clock)
            .with_description(self.description.unwrap_or_default())
            .with_tags(self.tags.unwrap_or_default())
            .with_links(self.links.unwrap_or_default()))
    }

    /// Converts the approved fields into a whitelisted change set.
    #[must_use]
    pub fn into_changes(self, clock: &impl Clock) -> TaskChanges {
        TaskChanges {
            title: self.title,
            description: self.description,
            tags: self.tags,
            links: self.links,
            column: self.column,
            position: self.position,
            ..TaskChanges::new(clock)
        }
    }
}
