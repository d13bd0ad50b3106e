//! `PostgreSQL` integration tests for single-task operations.

use super::helpers::{BoxError, execute_sql, setup, small_pool, test_runtime};
use kanban_board::board::{
    domain::{Column, Link, TaskId},
    services::TaskServiceError,
};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn task_round_trips_through_storage(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let created = ctx
            .service
            .create(&json!({
                "title": "Persist me",
                "description": "with every field",
                "tags": ["db", "diesel"],
                "links": [
                    {"url": "https://example.com/a", "type": "docs", "title": "A"},
                    {"url": "https://example.com/b"}
                ],
                "column": "review",
            }))
            .await?;

        let fetched = ctx.service.get(created.id()).await?;
        assert_eq!(fetched, created);
        assert_eq!(fetched.column(), Column::Review);
        assert_eq!(fetched.tags(), ["db".to_owned(), "diesel".to_owned()]);
        assert_eq!(
            fetched.links(),
            [
                Link::new("https://example.com/a")
                    .with_kind("docs")
                    .with_title("A"),
                Link::new("https://example.com/b"),
            ]
        );
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn update_persists_only_supplied_fields(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let created = ctx
            .service
            .create(&json!({"title": "Before", "description": "keep", "tags": ["t"]}))
            .await?;
        let updated = ctx
            .service
            .update(created.id(), &json!({"title": "After", "position": 6, "id": 77}))
            .await?;

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.title(), "After");
        assert_eq!(updated.description(), "keep");
        assert_eq!(updated.tags(), ["t".to_owned()]);
        assert_eq!(updated.position().value(), 6);
        assert_eq!(updated.created_at(), created.created_at());
        assert!(updated.updated_at() > created.updated_at());
        assert_eq!(ctx.service.get(created.id()).await?, updated);
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn missing_rows_report_not_found(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let created = ctx.service.create(&json!({"title": "Once"})).await?;
        ctx.service.delete(created.id()).await?;

        let second_delete = ctx.service.delete(created.id()).await;
        assert!(matches!(second_delete, Err(TaskServiceError::NotFound(_))));

        let update = ctx
            .service
            .update(TaskId::new(9_999), &json!({"title": "ghost"}))
            .await;
        assert!(matches!(update, Err(TaskServiceError::NotFound(_))));

        let get = ctx.service.get(created.id()).await;
        assert!(matches!(get, Err(TaskServiceError::NotFound(_))));
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn list_uses_board_order(shared_test_cluster: &'static TestCluster) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        ctx.service
            .import(&json!([
                {"title": "done", "column": "done", "position": 0},
                {"title": "backlog-late", "position": 3},
                {"title": "review", "column": "review", "position": 1},
                {"title": "backlog-early", "position": 1},
                {"title": "backlog-late-tie", "position": 3},
                {"title": "ready", "column": "ready", "position": 0},
                {"title": "in-progress", "column": "in-progress", "position": 5},
            ]))
            .await?;

        let titles: Vec<String> = ctx
            .service
            .list()
            .await?
            .iter()
            .map(|task| task.title().to_owned())
            .collect();
        assert_eq!(
            titles,
            [
                "backlog-early",
                "backlog-late",
                "backlog-late-tie",
                "done",
                "in-progress",
                "ready",
                "review",
            ]
        );
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn legacy_rows_with_nulls_are_normalized(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    execute_sql(
        &ctx.database,
        "INSERT INTO kanban_tasks (title, description, tags, links, column_name, position) \
         VALUES ('Legacy', NULL, NULL, NULL, 'ready', 2)",
    )?;

    test_runtime()?.block_on(async {
        let tasks = ctx.service.list().await?;
        let [legacy] = tasks.as_slice() else {
            return Err(format!("expected one task, found {}", tasks.len()).into());
        };
        assert_eq!(legacy.title(), "Legacy");
        assert_eq!(legacy.description(), "");
        assert!(legacy.tags().is_empty());
        assert!(legacy.links().is_empty());
        assert_eq!(legacy.column(), Column::Ready);

        let next = ctx
            .service
            .create(&json!({"title": "After legacy", "column": "ready"}))
            .await?;
        assert_eq!(next.position().value(), 3);
        Ok::<(), BoxError>(())
    })
}
