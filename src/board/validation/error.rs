//! Validation error taxonomy.

use thiserror::Error;

/// Errors describing the first constraint a payload violates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("task payload must be an object")]
    PayloadNotObject,

    /// A required title is missing.
    #[error("title is required")]
    MissingTitle,

    /// The title is an empty string.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A field has the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType {
        /// Offending field, with an index for array elements.
        field: String,
        /// Description of the accepted type.
        expected: &'static str,
    },

    /// A string field exceeds its length bound.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Offending field, with an index for array elements.
        field: String,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// An array field has too many entries.
    #[error("{field} must contain at most {max} entries, got {actual}")]
    TooMany {
        /// Offending field.
        field: &'static str,
        /// Maximum accepted entry count.
        max: usize,
        /// Supplied entry count.
        actual: usize,
    },

    /// The column is not one of the board columns.
    #[error("column must be one of backlog, ready, in-progress, review, done; got '{0}'")]
    InvalidColumn(String),

    /// The position is negative.
    #[error("position must be a non-negative integer, got {0}")]
    NegativePosition(i64),

    /// The position is too large to be stored.
    #[error("position is too large")]
    PositionOutOfRange,

    /// A link element is malformed.
    #[error("link at index {index}: {reason}")]
    InvalidLink {
        /// Index of the offending link.
        index: usize,
        /// Description of the violation.
        reason: String,
    },

    /// An update names none of the mutable fields.
    #[error("no updatable fields supplied; expected one of title, description, tags, links, column, position")]
    NoUpdatableFields,

    /// The import envelope is not an array of tasks.
    #[error("import payload must be a list of tasks")]
    ImportNotAList,

    /// The import envelope exceeds the batch cap.
    #[error("import accepts at most {max} tasks, got {actual}")]
    ImportTooLarge {
        /// Maximum batch size.
        max: usize,
        /// Supplied batch size.
        actual: usize,
    },
}

impl ValidationError {
    /// Creates a type error for the named field.
    #[must_use]
    pub fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// Creates a length error for the named field.
    #[must_use]
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates an error for a malformed link.
    #[must_use]
    pub fn invalid_link(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidLink {
            index,
            reason: reason.into(),
        }
    }
}
