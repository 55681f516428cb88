//! Service layer normalizing task requests before persistence.

use crate::normalize::normalize_field;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Request payload for creating or replacing a task.
///
/// `status` is accepted in any casing or spelling; the service rewrites it in
/// place with the canonical spelling before the request reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: String,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            status: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw status input.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
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

    /// Returns the status as currently held by the request.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    fn normalize(&mut self) -> TaskDraft {
        let status: TaskStatus = normalize_field(&mut self.status);
        TaskDraft {
            project_id: self.project_id,
            title: self.title.clone(),
            description: self.description.clone(),
            status,
        }
    }
}

/// Task orchestration service.
///
/// Storage errors are logged once here and returned unchanged.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the tasks of a project in creation order.
    ///
    /// # Errors
    ///
    /// Returns the repository error unchanged.
    pub async fn get_tasks(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.repository
            .list_by_project(project_id)
            .await
            .inspect_err(|err| error!(project_id = %project_id, error = %err, "failed to list tasks"))
    }

    /// Fetches a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist,
    /// or any other repository error unchanged.
    pub async fn get_task_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| TaskRepositoryError::NotFound(id.clone())))
            .inspect_err(|err| error!(task_id = %id, error = %err, "failed to load task"))
    }

    /// Normalizes the request's status and persists a new task.
    ///
    /// Returns the stored task, carrying its storage-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownProject`] when the store rejects
    /// the project reference, or any other repository error unchanged.
    pub async fn create_task(&self, request: &mut CreateTaskRequest) -> TaskRepositoryResult<Task> {
        let draft = request.normalize();
        self.repository.create(&draft).await.inspect_err(|err| {
            error!(project_id = %draft.project_id, error = %err, "failed to create task");
        })
    }

    /// Normalizes the request's status and replaces every field of the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist,
    /// or any other repository error unchanged.
    pub async fn update_task(
        &self,
        id: &TaskId,
        request: &mut CreateTaskRequest,
    ) -> TaskRepositoryResult<()> {
        let draft = request.normalize();
        self.repository
            .update(id, &draft)
            .await
            .inspect_err(|err| error!(task_id = %id, error = %err, "failed to update task"))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist,
    /// or any other repository error unchanged.
    pub async fn delete_task(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| error!(task_id = %id, error = %err, "failed to delete task"))
    }
}
