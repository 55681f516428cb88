//! `PostgreSQL` repository implementation for project tasks.

use super::{
    models::{NewTaskRow, StatusColumn, TaskChangesRow, TaskRow},
    schema::tasks,
};
use crate::project::domain::ProjectId;
use crate::storage::{BlockingError, PgPool, run_blocking};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn blocking_failure(err: BlockingError) -> TaskRepositoryError {
    TaskRepositoryError::persistence(err)
}

fn write_failure(project_id: ProjectId) -> impl Fn(DieselError) -> TaskRepositoryError {
    move |err| match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            TaskRepositoryError::UnknownProject(project_id)
        }
        _ => TaskRepositoryError::persistence(err),
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(
            &self.pool,
            move |connection| {
                let rows = tasks::table
                    .filter(tasks::project_id.eq(project_id.value()))
                    .order((tasks::created_at.asc(), tasks::id.asc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)?;
                Ok(rows.into_iter().map(row_to_task).collect())
            },
            blocking_failure,
        )
        .await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let task_id = id.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let row = tasks::table
                    .filter(tasks::id.eq(task_id.as_str()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                Ok(row.map(row_to_task))
            },
            blocking_failure,
        )
        .await
    }

    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let fields = draft.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let row = diesel::insert_into(tasks::table)
                    .values(&NewTaskRow {
                        project_id: fields.project_id.value(),
                        title: &fields.title,
                        description: &fields.description,
                        status: StatusColumn(fields.status),
                    })
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .map_err(write_failure(fields.project_id))?;
                Ok(row_to_task(row))
            },
            blocking_failure,
        )
        .await
    }

    async fn update(&self, id: &TaskId, draft: &TaskDraft) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        let fields = draft.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.as_str())))
                    .set(&TaskChangesRow {
                        project_id: fields.project_id.value(),
                        title: &fields.title,
                        description: &fields.description,
                        status: StatusColumn(fields.status),
                    })
                    .execute(connection)
                    .map_err(write_failure(fields.project_id))?;

                if updated == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }
                Ok(())
            },
            blocking_failure,
        )
        .await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(task_id.as_str())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

                if deleted == 0 {
                    return Err(TaskRepositoryError::NotFound(task_id));
                }
                Ok(())
            },
            blocking_failure,
        )
        .await
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        status,
        created_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        project_id: ProjectId::new(project_id),
        title,
        description,
        status: status.0,
        created_at,
    })
}
