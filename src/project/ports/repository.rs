//! Repository port for owner-scoped project persistence.

use crate::project::domain::{Project, ProjectDraft, ProjectId};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Every read and mutation except creation is scoped by owner: a project
/// owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns the owner's projects ordered by creation time, then id.
    async fn list_by_owner(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a project by id within the owner's projects.
    ///
    /// Returns `None` when the project does not exist or belongs to another
    /// owner.
    async fn find_by_id(
        &self,
        id: ProjectId,
        owner: &UserId,
    ) -> ProjectRepositoryResult<Option<Project>>;

    /// Stores a new project; the identifier and creation time are assigned by
    /// storage.
    async fn create(&self, owner: &UserId, draft: &ProjectDraft) -> ProjectRepositoryResult<()>;

    /// Replaces title, description, and priority of an owned project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when no project matches
    /// both id and owner.
    async fn update(
        &self,
        id: ProjectId,
        owner: &UserId,
        draft: &ProjectDraft,
    ) -> ProjectRepositoryResult<()>;

    /// Deletes an owned project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when no project matches
    /// both id and owner; nothing is deleted in that case.
    async fn delete(&self, id: ProjectId, owner: &UserId) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// No project matched the id and owner.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
