//! Given steps for kanban task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list()).wrap_err("list tasks for empty board")?;
    eyre::ensure!(tasks.is_empty(), "board should start empty");
    Ok(())
}

#[given(r#"a task titled "{title}" in column "{column}""#)]
fn existing_task(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let task = run_async(
        world
            .service
            .create(&json!({"title": title, "column": column})),
    )
    .wrap_err("create task in scenario setup")?;
    world.tasks_by_title.insert(title, task);
    Ok(())
}
