//! In-memory integration tests for positions and board order.

use super::helpers::{TestService, board_layout, create, service};
use rstest::rstest;
use serde_json::json;

fn row(title: &str, column: &str, position: i32) -> (String, String, i32) {
    (title.to_owned(), column.to_owned(), position)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_tasks_append_per_column(service: TestService) -> Result<(), eyre::Report> {
    create(&service, json!({"title": "b1"})).await?;
    create(&service, json!({"title": "d1", "column": "done"})).await?;
    create(&service, json!({"title": "b2", "column": "backlog"})).await?;
    create(&service, json!({"title": "r1", "column": "ready"})).await?;
    create(&service, json!({"title": "d2", "column": "done"})).await?;

    let layout = board_layout(&service).await?;
    eyre::ensure!(
        layout
            == vec![
                row("b1", "backlog", 0),
                row("b2", "backlog", 1),
                row("d1", "done", 0),
                row("d2", "done", 1),
                row("r1", "ready", 0),
            ],
        "unexpected layout: {layout:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_task_keeps_its_position_until_set(service: TestService) -> Result<(), eyre::Report> {
    create(&service, json!({"title": "stays", "column": "review"})).await?;
    create(&service, json!({"title": "filler"})).await?;
    let mover = create(&service, json!({"title": "mover"})).await?;

    service
        .update(mover.id(), &json!({"column": "review"}))
        .await?;
    let after_move = board_layout(&service).await?;
    eyre::ensure!(
        after_move
            == vec![
                row("filler", "backlog", 0),
                row("stays", "review", 0),
                row("mover", "review", 1),
            ],
        "unexpected layout after move: {after_move:?}"
    );

    service
        .update(mover.id(), &json!({"position": 0}))
        .await?;
    let after_reorder = board_layout(&service).await?;
    eyre::ensure!(
        after_reorder
            == vec![
                row("filler", "backlog", 0),
                row("stays", "review", 0),
                row("mover", "review", 0),
            ],
        "ties must fall back to creation order: {after_reorder:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn allocation_skips_past_gaps_left_by_deletes(service: TestService) -> Result<(), eyre::Report> {
    create(&service, json!({"title": "p0"})).await?;
    let middle = create(&service, json!({"title": "p1"})).await?;
    let last = create(&service, json!({"title": "p2"})).await?;
    service.delete(middle.id()).await?;
    service.delete(last.id()).await?;

    let next = create(&service, json!({"title": "again"})).await?;
    eyre::ensure!(next.position().value() == 1, "expected position 1, got {}", next.position());
    Ok(())
}
