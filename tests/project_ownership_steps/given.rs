//! Given steps for project ownership BDD scenarios.

use super::world::{ProjectOwnershipWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use ttracker::{project::services::CreateProjectRequest, user::domain::UserId};

#[given(r#"a project "{title}" owned by "{owner}" with priority "{priority}""#)]
fn owned_project(
    world: &mut ProjectOwnershipWorld,
    title: String,
    owner: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let mut request = CreateProjectRequest::new(owner.as_str(), title).with_priority(priority);
    run_async(world.service.create_project(&mut request)).wrap_err("create scenario project")?;
    let created = run_async(world.service.get_projects(&UserId::new(owner)))
        .wrap_err("list projects after creation")?
        .pop()
        .ok_or_else(|| eyre::eyre!("created project is not listed for its owner"))?;
    world.last_project = Some(created);
    Ok(())
}
