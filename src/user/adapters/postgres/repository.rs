//! `PostgreSQL` repository implementation for user identities.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::storage::{BlockingError, PgPool, run_blocking};
use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn blocking_failure(err: BlockingError) -> UserRepositoryError {
    UserRepositoryError::persistence(err)
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, id: &UserId) -> UserRepositoryResult<()> {
        let user_id = id.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                diesel::insert_into(users::table)
                    .values(&NewUserRow {
                        id: user_id.as_str(),
                    })
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            UserRepositoryError::DuplicateUser(user_id.clone())
                        }
                        _ => UserRepositoryError::persistence(err),
                    })?;
                Ok(())
            },
            blocking_failure,
        )
        .await
    }

    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<User>> {
        let user_id = id.clone();
        run_blocking(
            &self.pool,
            move |connection| {
                let row = users::table
                    .filter(users::id.eq(user_id.as_str()))
                    .select(UserRow::as_select())
                    .first::<UserRow>(connection)
                    .optional()
                    .map_err(UserRepositoryError::persistence)?;
                Ok(row.map(row_to_user))
            },
            blocking_failure,
        )
        .await
    }
}

fn row_to_user(row: UserRow) -> User {
    User::from_persisted(UserId::new(row.id), row.created_at)
}
