//! Error types for project domain parsing.

use thiserror::Error;

/// Error returned while parsing a persisted priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project priority: {0}")]
pub struct ParsePriorityError(pub String);
