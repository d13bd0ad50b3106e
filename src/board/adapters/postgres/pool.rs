//! Connection pool for the `PostgreSQL` task store.
//!
//! The pool is an explicitly constructed value handed to the store; there is
//! no process-wide pool. Connections are RAII guards returned to the pool on
//! drop, so every exit path releases them.

use crate::board::ports::{TaskStoreError, TaskStoreResult};
use crate::config::PoolConfig;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

/// `PostgreSQL` connection pool type used by board adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for internal use.
pub(super) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a bounded pool and opens its minimum set of connections.
///
/// # Errors
///
/// Returns [`TaskStoreError::Connection`] if the configuration is out of
/// bounds or the initial connections cannot be established within the
/// acquisition timeout.
pub fn build_pool(database_url: &str, config: &PoolConfig) -> TaskStoreResult<TaskPgPool> {
    config
        .validate()
        .map_err(|err| TaskStoreError::connection(err.to_string()))?;

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .min_idle(Some(config.min_connections))
        .max_size(config.max_connections)
        .connection_timeout(config.acquire_timeout())
        .build(manager)
        .map_err(|err| {
            tracing::error!(error = %err, "failed to initialise task connection pool");
            TaskStoreError::connection(err.to_string())
        })?;

    tracing::info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "task connection pool ready"
    );
    Ok(pool)
}

/// Obtains a connection, waiting up to the pool's acquisition timeout.
pub(super) fn get_conn(pool: &TaskPgPool) -> TaskStoreResult<PooledConn> {
    pool.get()
        .map_err(|err| TaskStoreError::connection(err.to_string()))
}
