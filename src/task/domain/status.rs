//! Task status and its accepted spellings.

use super::ParseTaskStatusError;
use crate::normalize::CanonicalValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started; also the fallback for unrecognized input.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl CanonicalValue for TaskStatus {
    const ALIASES: &'static [(&'static str, Self)] = &[
        ("Pending", Self::Pending),
        ("domain.Pending", Self::Pending),
        ("InProgress", Self::InProgress),
        ("domain.InProgress", Self::InProgress),
        ("In Progress", Self::InProgress),
        ("In_Progress", Self::InProgress),
        ("In-Progress", Self::InProgress),
        ("Done", Self::Done),
        ("domain.Done", Self::Done),
    ];
    const FALLBACK: Self = Self::Pending;

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Pending" => Ok(Self::Pending),
            "InProgress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
