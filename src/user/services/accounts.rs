//! Service layer for first sign-in registration.

use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use std::sync::Arc;
use tracing::error;

/// User registration service.
#[derive(Clone)]
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records an identity on its first sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the identity is
    /// already registered, or any other repository error unchanged.
    pub async fn create_user(&self, id: &UserId) -> UserRepositoryResult<()> {
        self.repository
            .create(id)
            .await
            .inspect_err(|err| error!(user_id = %id, error = %err, "failed to create user"))
    }

    /// Fetches a registered identity.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the identity has never
    /// signed in, or any other repository error unchanged.
    pub async fn get_user(&self, id: &UserId) -> UserRepositoryResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .and_then(|found| found.ok_or_else(|| UserRepositoryError::NotFound(id.clone())))
            .inspect_err(|err| error!(user_id = %id, error = %err, "failed to load user"))
    }
}
