//! Port contracts for user identities.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
