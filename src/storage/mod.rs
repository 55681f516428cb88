//! `PostgreSQL` connection pool and schema bootstrap.
//!
//! The pool is created once at process start and handed to each repository
//! constructor. Creating it performs the initial connectivity check, so an
//! unreachable database stops startup instead of surfacing on the first
//! request.

mod blocking;

pub use blocking::BlockingError;
pub(crate) use blocking::run_blocking;

use crate::config::DatabaseConfig;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tracing::info;

/// `PostgreSQL` connection pool shared by all repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent schema creating enum types and tables when absent.
pub const SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_tracker_tables/up.sql");

/// Errors raised while preparing the relational store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database could not be reached while building the pool.
    #[error("database is unreachable: {0}")]
    Connectivity(#[source] PoolError),

    /// A connection could not be checked out for bootstrap.
    #[error("could not check out a connection: {0}")]
    Checkout(#[source] PoolError),

    /// Executing the schema script failed.
    #[error("schema bootstrap failed: {0}")]
    Bootstrap(#[source] diesel::result::Error),
}

/// Builds the connection pool, failing fast when the database is unreachable.
///
/// # Errors
///
/// Returns [`StorageError::Connectivity`] when the pool cannot open its
/// initial connections within the configured timeout.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, StorageError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(config.connect_timeout())
        .build(manager)
        .map_err(StorageError::Connectivity)?;
    info!(
        max_connections = config.max_connections,
        "database connection pool ready"
    );
    Ok(pool)
}

/// Creates the tracker schema if it does not exist yet.
///
/// Safe to run on every startup.
///
/// # Errors
///
/// Returns [`StorageError::Checkout`] when no connection is available or
/// [`StorageError::Bootstrap`] when the schema script fails.
pub fn bootstrap_schema(pool: &PgPool) -> Result<(), StorageError> {
    let mut connection = pool.get().map_err(StorageError::Checkout)?;
    connection
        .batch_execute(SCHEMA_SQL)
        .map_err(StorageError::Bootstrap)?;
    info!("database schema is up to date");
    Ok(())
}
