//! `PostgreSQL` integration tests for batch insertion.

use super::helpers::{BoxError, setup, small_pool, test_runtime};
use crate::test_helpers::StepClock;
use kanban_board::board::{
    domain::{Column, NewTask, Position},
    ports::TaskStore,
};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
fn import_writes_valid_elements_and_reports_the_rest(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let outcome = ctx
            .service
            .import(&json!([
                {"title": "one", "tags": ["bulk"]},
                {"title": "two", "column": "done", "position": 8},
                {"title": 12},
                {"title": "four", "links": [{"url": "https://example.com"}]},
            ]))
            .await?;

        assert_eq!(outcome.imported, 3);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors.first().map(|err| err.index), Some(2));

        let tasks = ctx.service.list().await?;
        assert_eq!(tasks.len(), 3);
        let positions: Vec<(String, i32)> = tasks
            .iter()
            .map(|task| (task.title().to_owned(), task.position().value()))
            .collect();
        assert_eq!(
            positions,
            [
                ("one".to_owned(), 0),
                ("four".to_owned(), 0),
                ("two".to_owned(), 8),
            ]
        );
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn full_batch_at_the_cap_is_written(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let items: Vec<Value> = (0..1000)
            .map(|index| json!({"title": format!("bulk {index}"), "position": index}))
            .collect();
        let outcome = ctx.service.import(&Value::Array(items)).await?;

        assert_eq!(outcome.imported, 1000);
        assert_eq!(ctx.service.list().await?.len(), 1000);
        Ok::<(), BoxError>(())
    })
}

#[rstest]
fn batch_rejected_by_the_database_writes_nothing(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), BoxError> {
    let ctx = setup(shared_test_cluster, small_pool())?;

    test_runtime()?.block_on(async {
        let clock = StepClock::default();
        let oversized_title: String = std::iter::repeat_n('x', 300).collect();
        let drafts = vec![
            NewTask::new("fits", Column::Backlog, Position::FIRST, &clock),
            NewTask::new(oversized_title, Column::Backlog, Position::FIRST, &clock),
        ];

        let result = ctx.store.insert_batch(drafts).await;
        assert!(result.is_err(), "varchar(255) should reject the second row");
        assert!(ctx.store.list().await?.is_empty(), "batch was partially applied");
        Ok::<(), BoxError>(())
    })
}
