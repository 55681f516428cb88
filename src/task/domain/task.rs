//! Task record and the normalized payload written to storage.

use super::{TaskId, TaskStatus};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized task fields handed to storage on create and update.
///
/// An update replaces every field, including the owning project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Canonical status.
    pub status: TaskStatus,
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Storage-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
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

    /// Returns the canonical status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces every mutable field with a normalized draft.
    pub fn apply(&mut self, draft: &TaskDraft) {
        self.project_id = draft.project_id;
        self.title.clone_from(&draft.title);
        self.description.clone_from(&draft.description);
        self.status = draft.status;
    }
}
