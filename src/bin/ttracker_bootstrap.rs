//! Prepares the relational store for ttracker.
//!
//! Usage:
//!
//! ```text
//! ttracker-bootstrap [config-path]
//! ```
//!
//! Without a path the built-in defaults are used. `TTRACKER_DATABASE_URL` and
//! `TTRACKER_LOG` override the file, and a `.env` file in the working
//! directory is honoured. The process exits non-zero when the database is
//! unreachable or the schema cannot be created.

use std::env;

use thiserror::Error;
use tracing::{error, info};
use ttracker::config::{Config, ConfigError};
use ttracker::log::{self, LogError};
use ttracker::storage::{self, StorageError};

/// Errors that stop the bootstrap.
#[derive(Debug, Error)]
enum BootstrapError {
    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Log(#[from] LogError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn main() -> Result<(), BootstrapError> {
    let config = load_config(env::args_os().nth(1))?;
    log::setup(&config.log)?;
    run(&config).inspect_err(|err| error!(error = %err, "database bootstrap failed"))?;
    Ok(())
}

fn load_config(path: Option<std::ffi::OsString>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(file) => Config::from_file(file)?,
        None => Config::default(),
    };
    Ok(config.with_env_overrides())
}

fn run(config: &Config) -> Result<(), StorageError> {
    let pool = storage::connect(&config.database)?;
    storage::bootstrap_schema(&pool)?;
    info!("ttracker storage is ready");
    Ok(())
}
