//! Application services for the board.

mod error;
mod import;
mod task;

pub use error::{StorageError, TaskServiceError, TaskServiceResult};
pub use import::{ImportItemError, ImportOutcome};
pub use task::TaskService;
