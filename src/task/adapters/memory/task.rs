//! In-memory repository for project tasks.
//!
//! Referential integrity against projects is not checked here; any project id
//! is accepted.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    creation_order: Vec<TaskId>,
}

impl InMemoryTaskRepository {
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

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_failure(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_failure)?;
        Ok(state
            .creation_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_failure)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_failure)?;
        let id = TaskId::generate();
        let task = Task::from_persisted(PersistedTaskData {
            id: id.clone(),
            project_id: draft.project_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            created_at: self.clock.utc(),
        });
        state.creation_order.push(id.clone());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: &TaskId, draft: &TaskDraft) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        state
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?
            .apply(draft);
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_failure)?;
        if state.tasks.remove(id).is_none() {
            return Err(TaskRepositoryError::NotFound(id.clone()));
        }
        state.creation_order.retain(|existing| existing != id);
        Ok(())
    }
}
