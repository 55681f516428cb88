//! `PostgreSQL` repository implementation for owner-scoped projects.

use super::{
    models::{NewProjectRow, PriorityColumn, ProjectChangesRow, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{PersistedProjectData, Project, ProjectDraft, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::storage::{BlockingError, PgPool, run_blocking};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn blocking_failure(err: BlockingError) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(err)
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list_by_owner(&self, owner: &UserId) -> ProjectRepositoryResult<Vec<Project>> {
        let owner_id = owner.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = projects::table
                    .filter(projects::owner_id.eq(owner_id.as_str()))
                    .order((projects::created_at.asc(), projects::id.asc()))
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(connection)
                    .map_err(ProjectRepositoryError::persistence)?;
                Ok(rows.into_iter().map(row_to_project).collect())
            },
            blocking_failure,
        )
        .await
    }

    async fn find_by_id(
        &self,
        id: ProjectId,
        owner: &UserId,
    ) -> ProjectRepositoryResult<Option<Project>> {
        let owner_id = owner.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let row = projects::table
                    .filter(projects::id.eq(id.value()))
                    .filter(projects::owner_id.eq(owner_id.as_str()))
                    .select(ProjectRow::as_select())
                    .first::<ProjectRow>(connection)
                    .optional()
                    .map_err(ProjectRepositoryError::persistence)?;
                Ok(row.map(row_to_project))
            },
            blocking_failure,
        )
        .await
    }

    async fn create(&self, owner: &UserId, draft: &ProjectDraft) -> ProjectRepositoryResult<()> {
        let owner_id = owner.clone();
        let fields = draft.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(projects::table)
                    .values(&NewProjectRow {
                        owner_id: owner_id.as_str(),
                        title: &fields.title,
                        description: &fields.description,
                        priority: PriorityColumn(fields.priority),
                    })
                    .execute(connection)
                    .map_err(ProjectRepositoryError::persistence)?;
                Ok(())
            },
            blocking_failure,
        )
        .await
    }

    async fn update(
        &self,
        id: ProjectId,
        owner: &UserId,
        draft: &ProjectDraft,
    ) -> ProjectRepositoryResult<()> {
        let owner_id = owner.clone();
        let fields = draft.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let updated = diesel::update(
                    projects::table
                        .filter(projects::id.eq(id.value()))
                        .filter(projects::owner_id.eq(owner_id.as_str())),
                )
                .set(&ProjectChangesRow {
                    title: &fields.title,
                    description: &fields.description,
                    priority: PriorityColumn(fields.priority),
                })
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;

                if updated == 0 {
                    return Err(ProjectRepositoryError::NotFound(id));
                }
                Ok(())
            },
            blocking_failure,
        )
        .await
    }

    async fn delete(&self, id: ProjectId, owner: &UserId) -> ProjectRepositoryResult<()> {
        let owner_id = owner.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let deleted = diesel::delete(
                    projects::table
                        .filter(projects::id.eq(id.value()))
                        .filter(projects::owner_id.eq(owner_id.as_str())),
                )
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;

                if deleted == 0 {
                    return Err(ProjectRepositoryError::NotFound(id));
                }
                Ok(())
            },
            blocking_failure,
        )
        .await
    }
}

fn row_to_project(row: ProjectRow) -> Project {
    let ProjectRow {
        id,
        owner_id,
        title,
        description,
        priority,
        created_at,
    } = row;

    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id),
        owner_id: UserId::new(owner_id),
        title,
        description,
        priority: priority.0,
        created_at,
    })
}
