//! Bulk import results.

use crate::board::validation::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A task skipped during import, with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportItemError {
    /// Zero-based index of the element in the submitted list.
    pub index: usize,
    /// First constraint the element violated.
    pub error: ValidationError,
}

impl fmt::Display for ImportItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task at index {}: {}", self.index, self.error)
    }
}

impl Serialize for ImportItemError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a bulk import.
///
/// Skipped elements are a normal outcome, not a failure of the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Number of tasks written.
    pub imported: usize,
    /// One entry per skipped element, in submission order.
    pub errors: Vec<ImportItemError>,
}
