//! In-memory repository for owner-scoped projects.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{PersistedProjectData, Project, ProjectDraft, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory project repository.
///
/// Identifiers are assigned sequentially from 1, so iteration order over the
/// id-keyed map is creation order.
#[derive(Clone)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    last_id: i32,
    projects: BTreeMap<ProjectId, Project>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository using `clock` for creation timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_failure(err: impl ToString) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Returns the project when it exists and belongs to `owner`.
fn owned_mut<'a>(
    state: &'a mut InMemoryProjectState,
    id: ProjectId,
    owner: &UserId,
) -> ProjectRepositoryResult<&'a mut Project> {
    state
        .projects
        .get_mut(&id)
        .filter(|project| project.owner_id() == owner)
        .ok_or(ProjectRepositoryError::NotFound(id))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list_by_owner(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(storage_failure)?;
        Ok(state
            .projects
            .values()
            .filter(|project| project.owner_id() == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: ProjectId,
        owner: &UserId,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(storage_failure)?;
        Ok(state
            .projects
            .get(&id)
            .filter(|project| project.owner_id() == owner)
            .cloned())
    }

    async fn create(&self, owner: &UserId, draft: &ProjectDraft) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_failure)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| storage_failure("project identifier space exhausted"))?;
        let id = ProjectId::new(next);
        let project = Project::from_persisted(PersistedProjectData {
            id,
            owner_id: owner.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            created_at: self.clock.utc(),
        });
        state.last_id = next;
        state.projects.insert(id, project);
        Ok(())
    }

    async fn update(
        &self,
        id: ProjectId,
        owner: &UserId,
        draft: &ProjectDraft,
    ) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_failure)?;
        owned_mut(&mut state, id, owner)?.apply(draft);
        Ok(())
    }

    async fn delete(&self, id: ProjectId, owner: &UserId) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(storage_failure)?;
        owned_mut(&mut state, id, owner)?;
        state.projects.remove(&id);
        Ok(())
    }
}
