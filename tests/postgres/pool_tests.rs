//! `PostgreSQL` integration tests for connection pool behaviour.

use super::helpers::{BoxError, setup, small_pool, test_runtime};
use kanban_board::board::{
    adapters::postgres::build_pool,
    domain::TaskId,
    ports::TaskStoreError,
    services::TaskServiceError,
};
use kanban_board::config::PoolConfig;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use serde_json::json;
use std::collections::BTreeSet;

#[rstest]
fn connections_are_released_after_success_and_failure(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let task = ctx.service.create(&json!({"title": "pooled"})).await?;
        ctx.service.list().await?;
        let missing = ctx.service.delete(TaskId::new(task.id().value() + 1)).await;
        assert!(matches!(missing, Err(TaskServiceError::NotFound(_))));
        let invalid = ctx.service.create(&json!({"title": ""})).await;
        assert!(matches!(invalid, Err(TaskServiceError::Validation(_))));

        let state = ctx.store.pool().state();
        assert_eq!(
            state.idle_connections, state.connections,
            "every connection should be back in the pool"
        );
        assert!(state.connections <= 3);
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn concurrent_creates_share_a_bounded_pool(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let handles: Vec<_> = (0..24)
            .map(|index| {
                let shared = ctx.service.clone();
                tokio::spawn(async move {
                    shared
                        .create(&json!({"title": format!("concurrent {index}"), "column": "ready"}))
                        .await
                })
            })
            .collect();

        let mut ids = BTreeSet::new();
        let mut positions = BTreeSet::new();
        for handle in handles {
            let task = handle.await??;
            ids.insert(task.id());
            positions.insert(task.position().value());
        }

        assert_eq!(ids.len(), 24);
        assert!(
            positions.iter().all(|position| (0..24).contains(position)),
            "positions outside 0..24: {positions:?}"
        );
        assert_eq!(ctx.service.list().await?.len(), 24);
        let state = ctx.store.pool().state();
        assert!(state.connections <= 3, "pool exceeded its bound: {state:?}");
        assert_eq!(state.idle_connections, state.connections);
        Ok::<(), BoxError>(())
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_fails_within_the_timeout() -> Result<(), BoxError> {
    let config = PoolConfig {
        min_connections: 1,
        max_connections: 1,
        acquire_timeout_secs: 1,
    };
    let result = tokio::task::spawn_blocking(move || {
        build_pool("postgres://kanban@127.0.0.1:1/kanban", &config)
    })
    .await?;

    assert!(matches!(result, Err(TaskStoreError::Connection(_))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_pool_bounds_are_rejected_before_connecting() -> Result<(), BoxError> {
    let config = PoolConfig {
        min_connections: 4,
        max_connections: 2,
        acquire_timeout_secs: 1,
    };
    let result = build_pool("postgres://kanban@127.0.0.1:1/kanban", &config);

    assert!(matches!(result, Err(TaskStoreError::Connection(message)) if message.contains("min_connections")));
    Ok(())
}
