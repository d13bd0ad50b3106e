//! Workflow columns of the board.

use super::ParseColumnError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage a task belongs to.
///
/// The set is closed: every persisted task carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    /// Not yet scheduled.
    #[default]
    Backlog,
    /// Scheduled and ready to be picked up.
    Ready,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl Column {
    /// Every column in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Ready,
        Self::InProgress,
        Self::Review,
        Self::Done,
    ];

    /// Returns the canonical external and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Ready => "ready",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for Column {
    type Error = ParseColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == value)
            .ok_or_else(|| ParseColumnError(value.to_owned()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
