//! Then steps for project ownership BDD scenarios.

use super::world::{ProjectOwnershipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use ttracker::{
    normalize::CanonicalValue, project::ports::ProjectRepositoryError, user::domain::UserId,
};

#[then(r#"the project priority is "{priority}""#)]
fn project_priority_is(world: &ProjectOwnershipWorld, priority: String) -> Result<(), eyre::Report> {
    let actual = world.project()?.priority();
    if actual.as_str() != priority {
        return Err(eyre::eyre!("expected priority {priority}, found {actual}"));
    }
    Ok(())
}

#[then(r#""{owner}" has {count:usize} project"#)]
fn owner_has_projects(
    world: &ProjectOwnershipWorld,
    owner: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let projects = run_async(world.service.get_projects(&UserId::new(owner.as_str())))
        .wrap_err("list owner projects")?;
    if projects.len() != count {
        return Err(eyre::eyre!(
            "expected {count} projects for {owner}, found {}",
            projects.len()
        ));
    }
    Ok(())
}

#[then(r#""{owner}" still sees the project"#)]
fn owner_still_sees_project(
    world: &ProjectOwnershipWorld,
    owner: String,
) -> Result<(), eyre::Report> {
    let expected = world.project()?;
    let found = run_async(
        world
            .service
            .get_project_by_id(expected.id(), &UserId::new(owner)),
    )
    .wrap_err("look up project as its owner")?;
    if &found != expected {
        return Err(eyre::eyre!("project changed: {found:?}"));
    }
    Ok(())
}

#[then("the request is rejected as not found")]
fn request_rejected_as_not_found(world: &ProjectOwnershipWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    if !matches!(result, Err(ProjectRepositoryError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("the request succeeds")]
fn request_succeeds(world: &ProjectOwnershipWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}
