//! In-memory adapters for board persistence.

mod store;

pub use store::InMemoryTaskStore;
