//! Behaviour tests for owner-scoped project access.

#[path = "project_ownership_steps/mod.rs"]
mod project_ownership_steps_defs;

use project_ownership_steps_defs::world::{ProjectOwnershipWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/project_ownership.feature",
    name = "Create a project with loosely spelled priority"
)]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_loose_priority(world: ProjectOwnershipWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_ownership.feature",
    name = "Reject deletion by another owner"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_foreign_delete(world: ProjectOwnershipWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_ownership.feature",
    name = "Hide a project from another owner"
)]
#[tokio::test(flavor = "multi_thread")]
async fn hide_from_foreign_owner(world: ProjectOwnershipWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/project_ownership.feature",
    name = "Delete an owned project"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_owned_project(world: ProjectOwnershipWorld) {
    let _ = world;
}
