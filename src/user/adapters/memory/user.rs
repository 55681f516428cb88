//! In-memory repository for user identities.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository using `clock` for creation timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            users: Arc::default(),
            clock,
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, id: &UserId) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if users.contains_key(id) {
            return Err(UserRepositoryError::DuplicateUser(id.clone()));
        }
        users.insert(id.clone(), User::from_persisted(id.clone(), self.clock.utc()));
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(id).cloned())
    }
}
