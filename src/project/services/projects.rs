//! Service layer normalizing project requests before persistence.

use crate::normalize::normalize_field;
use crate::project::{
    domain::{Project, ProjectDraft, ProjectId, ProjectPriority},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Request payload for creating or replacing a project.
///
/// `priority` is accepted in any casing; the service rewrites it in place
/// with the canonical spelling before the request reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    owner_id: UserId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    priority: String,
}

impl CreateProjectRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(owner_id: impl Into<UserId>, title: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            title: title.into(),
            description: String::new(),
            priority: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw priority input.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Returns the owning identity.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority as currently held by the request.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Canonicalizes the priority in place and builds the storage draft.
    fn normalize(&mut self) -> ProjectDraft {
        let priority: ProjectPriority = normalize_field(&mut self.priority);
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority,
        }
    }
}

/// Project orchestration service.
///
/// Storage errors are logged once here and returned unchanged.
#[derive(Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the projects owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns the repository error unchanged.
    pub async fn get_projects(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>> {
        self.repository
            .list_by_owner(owner)
            .await
            .inspect_err(|err| error!(owner_id = %owner, error = %err, "failed to list projects"))
    }

    /// Fetches one of the owner's projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist or belongs to another owner, or any other repository error
    /// unchanged.
    pub async fn get_project_by_id(
        &self,
        id: ProjectId,
        owner: &UserId,
    ) -> ProjectRepositoryResult<Project> {
        self.repository
            .find_by_id(id, owner)
            .await
            .and_then(|found| found.ok_or(ProjectRepositoryError::NotFound(id)))
            .inspect_err(|err| {
                error!(project_id = %id, owner_id = %owner, error = %err, "failed to load project");
            })
    }

    /// Normalizes the request's priority and persists a new project.
    ///
    /// Nothing is returned on success; callers list the owner's projects to
    /// observe the stored record.
    ///
    /// # Errors
    ///
    /// Returns the repository error unchanged.
    pub async fn create_project(
        &self,
        request: &mut CreateProjectRequest,
    ) -> ProjectRepositoryResult<()> {
        let draft = request.normalize();
        self.repository
            .create(request.owner_id(), &draft)
            .await
            .inspect_err(|err| {
                error!(owner_id = %request.owner_id, error = %err, "failed to create project");
            })
    }

    /// Normalizes the request's priority and replaces the project's fields.
    ///
    /// The update only applies when the project belongs to the request's
    /// owner.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when no project matches
    /// both id and owner, or any other repository error unchanged.
    pub async fn update_project(
        &self,
        id: ProjectId,
        request: &mut CreateProjectRequest,
    ) -> ProjectRepositoryResult<()> {
        let draft = request.normalize();
        self.repository
            .update(id, request.owner_id(), &draft)
            .await
            .inspect_err(|err| {
                error!(project_id = %id, owner_id = %request.owner_id, error = %err, "failed to update project");
            })
    }

    /// Deletes one of the owner's projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when no project matches
    /// both id and owner, or any other repository error unchanged.
    pub async fn delete_project(&self, id: ProjectId, owner: &UserId) -> ProjectRepositoryResult<()> {
        self.repository
            .delete(id, owner)
            .await
            .inspect_err(|err| {
                error!(project_id = %id, owner_id = %owner, error = %err, "failed to delete project");
            })
    }
}
