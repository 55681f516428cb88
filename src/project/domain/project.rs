//! Project record and the normalized payload written to storage.

use super::{ProjectId, ProjectPriority};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized project fields handed to storage on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Project title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Canonical priority.
    pub priority: ProjectPriority,
}

/// A persisted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner_id: UserId,
    title: String,
    description: String,
    priority: ProjectPriority,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Owning identity.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: ProjectPriority,
    /// Storage-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
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

    /// Returns the canonical priority.
    #[must_use]
    pub const fn priority(&self) -> ProjectPriority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the mutable fields with a normalized draft.
    pub fn apply(&mut self, draft: &ProjectDraft) {
        self.title.clone_from(&draft.title);
        self.description.clone_from(&draft.description);
        self.priority = draft.priority;
    }
}
