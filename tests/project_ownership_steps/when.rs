//! When steps for project ownership BDD scenarios.

use super::world::{ProjectOwnershipWorld, run_async};
use rstest_bdd_macros::when;
use ttracker::user::domain::UserId;

#[when(r#""{owner}" deletes the project"#)]
fn delete_project(world: &mut ProjectOwnershipWorld, owner: String) -> Result<(), eyre::Report> {
    let id = world.project()?.id();
    let result = run_async(world.service.delete_project(id, &UserId::new(owner)));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{owner}" looks up the project"#)]
fn look_up_project(world: &mut ProjectOwnershipWorld, owner: String) -> Result<(), eyre::Report> {
    let id = world.project()?.id();
    let result = run_async(world.service.get_project_by_id(id, &UserId::new(owner)));
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}
