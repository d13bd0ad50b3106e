//! Domain model for the kanban board.
//!
//! Tasks live in exactly one workflow column and carry an advisory position
//! inside it. The domain has no knowledge of storage or transport.

mod column;
mod error;
mod ids;
mod link;
mod task;

pub use column::Column;
pub use error::{ParseColumnError, TaskDomainError};
pub use ids::{Position, TaskId};
pub use link::Link;
pub use task::{
    DeleteConfirmation, NewTask, PersistedTaskData, Task, TaskChanges, sort_for_board,
};
