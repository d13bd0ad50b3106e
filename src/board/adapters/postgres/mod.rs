//! `PostgreSQL` adapters for board persistence.

mod models;
mod pool;
mod schema;
mod store;

pub use pool::{TaskPgPool, build_pool};
pub use store::PostgresTaskStore;
