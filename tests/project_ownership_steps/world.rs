//! Shared world state for project ownership BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use ttracker::project::{
    adapters::memory::InMemoryProjectRepository, domain::Project,
    ports::ProjectRepositoryResult, services::ProjectService,
};

/// Service type used by the BDD world.
pub type TestProjectService = ProjectService<InMemoryProjectRepository>;

/// Scenario world for project ownership behaviour tests.
pub struct ProjectOwnershipWorld {
    pub service: TestProjectService,
    pub last_project: Option<Project>,
    pub last_result: Option<ProjectRepositoryResult<()>>,
}

impl ProjectOwnershipWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: ProjectService::new(Arc::new(InMemoryProjectRepository::new())),
            last_project: None,
            last_result: None,
        }
    }

    /// Returns the project created by the scenario.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.last_project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created project in scenario world"))
    }
}

impl Default for ProjectOwnershipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectOwnershipWorld {
    ProjectOwnershipWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
