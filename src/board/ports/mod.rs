//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod store;

#[cfg(test)]
pub use store::MockTaskStore;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
