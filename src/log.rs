//! Logging setup.
//!
//! Installs a `tracing-subscriber` formatter as the global default. The
//! `TTRACKER_LOG` environment filter takes precedence over the configured
//! directive.

use crate::config::{LOG_FILTER_ENV, LogConfig};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The configured filter directive is invalid.
    #[error("invalid log filter '{0}': {1}")]
    InvalidFilter(String, #[source] ParseError),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Install(String),
}

/// Resolves the effective filter from the environment or configuration.
///
/// # Errors
///
/// Returns [`LogError::InvalidFilter`] when the configured directive cannot be
/// parsed and no environment filter is set.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter, LogError> {
    EnvFilter::try_from_env(LOG_FILTER_ENV).or_else(|_| {
        EnvFilter::try_new(&config.filter)
            .map_err(|err| LogError::InvalidFilter(config.filter.clone(), err))
    })
}

/// Installs the global log subscriber.
///
/// # Errors
///
/// Returns [`LogError`] when the filter is invalid or a subscriber is already
/// installed.
pub fn setup(config: &LogConfig) -> Result<(), LogError> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_target(true)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|err| LogError::Install(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{LogError, env_filter};
    use crate::config::LogConfig;

    #[test]
    fn rejects_malformed_directive() {
        let config = LogConfig {
            filter: "ttracker=loudest".to_owned(),
            ansi: false,
        };
        // Only meaningful when the environment does not provide a filter.
        if std::env::var(crate::config::LOG_FILTER_ENV).is_ok() {
            return;
        }
        assert!(matches!(
            env_filter(&config),
            Err(LogError::InvalidFilter(_, _))
        ));
    }

    #[test]
    fn accepts_level_directive() {
        let config = LogConfig {
            filter: "ttracker=debug,warn".to_owned(),
            ansi: false,
        };
        assert!(env_filter(&config).is_ok());
    }
}
