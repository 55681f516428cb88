//! Offloads synchronous Diesel work from the async executor.

use super::PgPool;
use diesel::PgConnection;
use diesel::r2d2::PoolError;
use thiserror::Error;
use tokio::task::JoinError;

/// Failures raised around a blocking database call rather than by it.
#[derive(Debug, Error)]
pub enum BlockingError {
    /// No connection could be checked out of the pool.
    #[error("connection checkout failed: {0}")]
    Checkout(#[source] PoolError),

    /// The blocking task panicked or was cancelled.
    #[error("blocking task join error: {0}")]
    Join(#[source] JoinError),
}

/// Runs `f` with a pooled connection on tokio's blocking thread pool.
///
/// `map_err` converts checkout and join failures into the caller's error type;
/// errors returned by `f` pass through untouched.
pub(crate) async fn run_blocking<F, T, E>(
    pool: &PgPool,
    f: F,
    map_err: fn(BlockingError) -> E,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool
            .get()
            .map_err(|err| map_err(BlockingError::Checkout(err)))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| map_err(BlockingError::Join(err)))?
}
