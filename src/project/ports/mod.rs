//! Port contracts for project persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
